use serde::{Deserialize, Serialize};

/// Recipe as returned by the backend: dish name, ordered instructions and a priced shopping
/// list.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct RecipeResponse {
    pub name: String,
    pub recipe: Vec<String>,
    pub ingredients: Vec<Ingredient>,
}

/// A single product of the shopping list.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Ingredient {
    pub name: String,
    pub img_url: String,
    /// Price in euros. Absent prices count as zero.
    #[serde(default)]
    pub price: Option<f64>,
}

impl Ingredient {
    fn new(name: &str, img_url: &str, price: f64) -> Self {
        Self {
            name: name.to_string(),
            img_url: img_url.to_string(),
            price: Some(price),
        }
    }
}

impl RecipeResponse {
    /// Sum of all ingredient prices.
    pub fn total_price(&self) -> f64 {
        self.ingredients
            .iter()
            .map(|ingredient| ingredient.price.unwrap_or(0.0))
            .sum()
    }
}

/// Fixed recipe shown whenever the backend cannot be used.
pub fn example() -> RecipeResponse {
    RecipeResponse {
        name: "Espaguetis a la Carbonara".to_string(),
        recipe: [
            "Hervir los espaguetis en agua con sal hasta que estén al dente.",
            "En una sartén aparte, cocinar la panceta hasta que esté crujiente.",
            "En un bol, batir los huevos con el queso.",
            "Escurrir los espaguetis y añadirlos a la sartén con la panceta.",
            "Retirar del fuego y mezclar rápidamente con la mezcla de huevo y queso.",
            "Servir inmediatamente con queso extra y pimienta.",
        ]
        .iter()
        .map(|step| step.to_string())
        .collect(),
        ingredients: vec![
            Ingredient::new(
                "Espaguetis",
                "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcS2kbsX1IbOLCT4bVs_rFueXiXrdiBMMDhbEw&s",
                1.5,
            ),
            Ingredient::new(
                "Panceta",
                "https://m.media-amazon.com/images/I/71goicKgmSL.jpg",
                3.0,
            ),
            Ingredient::new(
                "Huevos",
                "https://bakerpedia.com/wp-content/uploads/2020/03/Egg_baking-ingredients-e1584136402126.jpg",
                0.5,
            ),
            Ingredient::new(
                "Queso Parmesano",
                "https://upload.wikimedia.org/wikipedia/commons/thumb/d/d1/Parmigiano_Reggiano%2C_Italien%2C_Europ%C3%A4ische_Union.jpg/960px-Parmigiano_Reggiano%2C_Italien%2C_Europ%C3%A4ische_Union.jpg",
                2.5,
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_treats_missing_price_as_zero() {
        let response: RecipeResponse = serde_json::from_str(
            r#"{
                "name": "Tortilla",
                "recipe": ["Beat eggs", "Fry"],
                "ingredients": [
                    {"name": "Eggs", "img_url": "x", "price": 1.25},
                    {"name": "Salt", "img_url": "y"},
                    {"name": "Oil", "img_url": "z", "price": null},
                    {"name": "Potatoes", "img_url": "w", "price": 2.5}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(response.ingredients[1].price, None);
        assert_eq!(response.total_price(), 3.75);
    }

    #[test]
    fn total_of_empty_list_is_zero() {
        assert_eq!(RecipeResponse::default().total_price(), 0.0);
    }

    #[test]
    fn example_is_stable() {
        let example = example();

        assert_eq!(example, super::example());
        assert_eq!(example.recipe.len(), 6);
        assert_eq!(example.ingredients.len(), 4);
        assert_eq!(example.total_price(), 7.5);
    }
}
