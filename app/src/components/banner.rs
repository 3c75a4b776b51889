use client::state::SubmissionState;

/// Error line shown above the recipe, empty if the last submission went through.
pub fn banner(submission: &SubmissionState) -> String {
    match &submission.error {
        Some(error) => format!("! {error}\n\n"),
        None => String::new(),
    }
}
