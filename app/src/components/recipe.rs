use models::RecipeResponse;

pub fn recipe(response: &RecipeResponse) -> String {
    let steps = response
        .recipe
        .iter()
        .enumerate()
        .map(|(index, step)| format!("{}. {step}\n", index + 1))
        .collect::<String>();

    format!("{}\n\n{steps}", response.name)
}
