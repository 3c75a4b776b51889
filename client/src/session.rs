//! Drives [`State`](crate::State) through image selection and submission against a
//! [`Backend`].

use crate::state::{reduce, Event, ReadToken, Stage, State};
use crate::{Backend, Error, Result, SelectedImage};
use models::RecipeResponse;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};
use tracing::{debug, error, info, instrument, warn};

pub struct Session<B> {
    backend: B,
    state: RwLock<State>,
    reads: AtomicU64,
}

/// Dispatches [`Event::Finished`] when dropped, so an aborted or failed attempt never leaves the
/// session in flight.
struct InFlight<'a> {
    state: &'a RwLock<State>,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        apply(self.state, Event::Finished);
    }
}

fn apply(state: &RwLock<State>, event: Event) {
    let mut state = state.write().unwrap_or_else(PoisonError::into_inner);
    *state = reduce(&state, event);
}

impl<B: Backend> Session<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: RwLock::new(State::default()),
            reads: AtomicU64::new(0),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> State {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Apply `event` to the state.
    pub fn dispatch(&self, event: Event) {
        apply(&self.state, event);
    }

    /// Read the first of `files` and make it the current image. Nothing happens if `files` is
    /// empty. If another selection starts before this one completes, the later one wins.
    #[instrument(skip_all)]
    pub async fn select<P: AsRef<Path>>(&self, files: &[P]) -> Result<()> {
        let Some(file) = files.first() else {
            debug!("no file selected");
            return Ok(());
        };

        let path: &Path = file.as_ref();

        let token = ReadToken(self.reads.fetch_add(1, Ordering::SeqCst) + 1);
        self.dispatch(Event::ReadStarted(token));

        let image = SelectedImage::read(path).await?;
        info!("Loaded {} ({} characters)", image.name(), image.data_url().len());

        self.dispatch(Event::ReadFinished(token, image));

        if self.state().latest_read() != token {
            debug!("discarded stale read of {}", path.display());
        }

        Ok(())
    }

    /// Upload the current image and store the resulting recipe.
    ///
    /// Returns [`Error::NoImage`] or [`Error::SubmissionOngoing`] without touching the state when
    /// the submission cannot start. Any failure after that is recorded in the state, together
    /// with the example recipe, and `Ok` is returned.
    #[instrument(skip_all)]
    pub async fn submit(&self) -> Result<()> {
        let image = self.begin()?;
        let _in_flight = InFlight { state: &self.state };

        match self.exchange(&image).await {
            Ok(response) => {
                info!("Image uploaded successfully");
                debug!("Name: {}", response.name);
                debug!("Recipe: {:?}", response.recipe);
                debug!("Ingredients: {:?}", response.ingredients);

                self.dispatch(Event::Succeeded(response));
            }
            Err(err) => {
                error!("Error uploading image: {err}");
                self.dispatch(Event::Failed(err.to_string()));
            }
        }

        Ok(())
    }

    /// Check and enter the submitting state in one step.
    fn begin(&self) -> Result<SelectedImage> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);

        if state.submission.in_flight {
            warn!("Submission is ongoing");
            return Err(Error::SubmissionOngoing);
        }

        let Some(image) = state.image.clone() else {
            warn!("No image selected to upload.");
            return Err(Error::NoImage);
        };

        *state = reduce(&state, Event::Submit);

        Ok(image)
    }

    async fn exchange(&self, image: &SelectedImage) -> Result<RecipeResponse> {
        let blob = image.blob()?;

        self.dispatch(Event::Advance(Stage::GeneratingRecipe));
        let reply = self.backend.upload(blob).await?;

        if !reply.status.is_success() {
            return Err(Error::Status(reply.status));
        }

        self.dispatch(Event::Advance(Stage::LookingUpProducts));

        Ok(serde_json::from_slice(&reply.body)?)
    }
}
