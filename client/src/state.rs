//! Session state and the pure transition function driving it.
//!
//! A submission moves `Idle → Submitting → Success | Failure → Idle`:
//!
//! * [`Event::Submit`] starts it, but only from idle and only with an image selected.
//! * [`Event::Advance`] updates the progress label.
//! * [`Event::Succeeded`] or [`Event::Failed`] finalizes the response and error.
//! * [`Event::Finished`] returns to idle.
//!
//! File reads are tagged with a [`ReadToken`] so that only the most recent selection lands.

use crate::SelectedImage;
use models::RecipeResponse;

const ERROR_PREFIX: &str = "Failed to upload image";
const UNKNOWN_ERROR: &str = "unknown error";

/// Sequence number of a file read. Later selections carry larger tokens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReadToken(pub u64);

/// Progress of an in-flight submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Classifying,
    GeneratingRecipe,
    LookingUpProducts,
}

impl Stage {
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Classifying => "Classifying ingredients...",
            Stage::GeneratingRecipe => "Generating recipe...",
            Stage::LookingUpProducts => "Looking up products...",
        }
    }
}

/// Transient fields of a submission attempt.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubmissionState {
    pub in_flight: bool,
    pub stage: Option<Stage>,
    pub error: Option<String>,
}

impl SubmissionState {
    /// Human readable progress, empty when idle.
    pub fn progress_label(&self) -> &'static str {
        self.stage.map(|stage| stage.label()).unwrap_or_default()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct State {
    pub image: Option<SelectedImage>,
    pub submission: SubmissionState,
    pub response: Option<RecipeResponse>,
    latest_read: ReadToken,
}

#[derive(Clone, Debug)]
pub enum Event {
    ReadStarted(ReadToken),
    ReadFinished(ReadToken, SelectedImage),
    Submit,
    Advance(Stage),
    Succeeded(RecipeResponse),
    /// Carries the underlying error text, possibly empty.
    Failed(String),
    Finished,
}

impl State {
    /// A submission may start only from idle with an image present.
    pub fn can_submit(&self) -> bool {
        !self.submission.in_flight && self.image.is_some()
    }

    /// Token of the most recently started read.
    pub fn latest_read(&self) -> ReadToken {
        self.latest_read
    }

    /// Total price of the loaded response, zero if there is none.
    pub fn total_price(&self) -> f64 {
        self.response
            .as_ref()
            .map_or(0.0, RecipeResponse::total_price)
    }
}

/// User-facing message for a failed submission.
pub fn error_message(underlying: &str) -> String {
    let underlying = underlying.trim();

    if underlying.is_empty() {
        format!("{ERROR_PREFIX}: {UNKNOWN_ERROR}")
    } else {
        format!("{ERROR_PREFIX}: {underlying}")
    }
}

/// Compute the state following `event`. Events that do not apply to `state` leave it unchanged.
pub fn reduce(state: &State, event: Event) -> State {
    let mut next = state.clone();

    match event {
        Event::ReadStarted(token) => {
            next.latest_read = next.latest_read.max(token);
        }
        Event::ReadFinished(token, image) => {
            if token == next.latest_read {
                next.image = Some(image);
            }
        }
        Event::Submit => {
            if state.can_submit() {
                next.submission = SubmissionState {
                    in_flight: true,
                    stage: Some(Stage::Classifying),
                    error: None,
                };
            }
        }
        Event::Advance(stage) => {
            if state.submission.in_flight {
                next.submission.stage = Some(stage);
            }
        }
        Event::Succeeded(response) => {
            if state.submission.in_flight {
                next.response = Some(response);
                next.submission.error = None;
            }
        }
        Event::Failed(underlying) => {
            if state.submission.in_flight {
                next.response = Some(models::example());
                next.submission.error = Some(error_message(&underlying));
            }
        }
        Event::Finished => {
            next.submission.in_flight = false;
            next.submission.stage = None;
        }
    }

    next
}
