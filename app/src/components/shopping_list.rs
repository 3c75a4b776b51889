use models::{Ingredient, RecipeResponse};

fn price(value: f64) -> String {
    format!("{value:.2} €")
}

fn item(ingredient: &Ingredient) -> String {
    let cost = ingredient
        .price
        .map(price)
        .unwrap_or_else(|| "-".to_string());

    format!("- {}: {cost}\n  {}\n", ingredient.name, ingredient.img_url)
}

/// Ingredients with their prices and the running total.
pub fn shopping_list(response: &RecipeResponse) -> String {
    let items = response.ingredients.iter().map(item).collect::<String>();

    format!(
        "Shopping list\n{items}Total: {}\n",
        price(response.total_price())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_items_and_total() {
        let response = RecipeResponse {
            name: "Tortilla".to_string(),
            recipe: vec![],
            ingredients: vec![
                Ingredient {
                    name: "Eggs".to_string(),
                    img_url: "x".to_string(),
                    price: Some(1.2),
                },
                Ingredient {
                    name: "Salt".to_string(),
                    img_url: "y".to_string(),
                    price: None,
                },
            ],
        };

        assert_eq!(
            shopping_list(&response),
            "Shopping list\n- Eggs: 1.20 €\n  x\n- Salt: -\n  y\nTotal: 1.20 €\n"
        );
    }

    #[test]
    fn empty_list_costs_nothing() {
        assert_eq!(
            shopping_list(&RecipeResponse::default()),
            "Shopping list\nTotal: 0.00 €\n"
        );
    }
}
