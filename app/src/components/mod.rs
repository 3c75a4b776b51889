mod banner;
mod recipe;
mod shopping_list;

pub use banner::banner;
pub use recipe::recipe;
pub use shopping_list::shopping_list;

use client::State;

/// Everything the user sees once a submission has finished.
pub fn page(state: &State) -> String {
    let mut page = banner(&state.submission);

    if let Some(response) = &state.response {
        page.push_str(&recipe(response));
        page.push('\n');
        page.push_str(&shopping_list(response));
    }

    page
}
