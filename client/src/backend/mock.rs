use crate::backend::{Backend, Reply};
use crate::{Blob, Error, Result};
use models::RecipeResponse;
use reqwest::StatusCode;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::time::{sleep, Duration};
use tracing::{debug, instrument};

#[derive(Clone, Debug)]
enum Behaviour {
    Reply(Reply),
    Refuse(String),
}

/// In-memory backend answering every upload the same way. Records what it received.
#[derive(Clone, Debug)]
pub struct Mock {
    behaviour: Behaviour,
    delay: Option<Duration>,
    uploads: Arc<Mutex<Vec<Blob>>>,
}

impl Mock {
    fn with(behaviour: Behaviour) -> Self {
        Self {
            behaviour,
            delay: None,
            uploads: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Answer with `status` and a raw `body`.
    pub fn reply(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self::with(Behaviour::Reply(Reply {
            status,
            body: body.into(),
        }))
    }

    /// Answer `200 OK` with `recipe` serialized as JSON.
    pub fn recipe(recipe: &RecipeResponse) -> Result<Self> {
        Ok(Self::reply(StatusCode::OK, serde_json::to_vec(recipe)?))
    }

    /// Fail every upload as if the connection was refused.
    pub fn refuse(reason: impl Into<String>) -> Self {
        Self::with(Behaviour::Refuse(reason.into()))
    }

    /// Wait `delay` before answering.
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Images received so far.
    pub fn uploads(&self) -> Vec<Blob> {
        self.uploads
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait::async_trait]
impl Backend for Mock {
    #[instrument(skip_all)]
    async fn upload(&self, image: Blob) -> Result<Reply> {
        debug!("mock upload of {} bytes of {}", image.bytes.len(), image.mime);

        self.uploads
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(image);

        if let Some(delay) = self.delay {
            sleep(delay).await;
        }

        match &self.behaviour {
            Behaviour::Reply(reply) => Ok(reply.clone()),
            Behaviour::Refuse(reason) => Err(Error::Connection(reason.clone())),
        }
    }
}
