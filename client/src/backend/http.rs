use crate::backend::{Backend, Reply, DEFAULT_ENDPOINT, FIELD_NAME, FILE_NAME};
use crate::{Blob, Result};
use reqwest::multipart::{Form, Part};
use tracing::{debug, instrument};

/// Backend reached over HTTP. No timeout is set, the transport default applies.
#[derive(Clone, Debug)]
pub struct Http {
    client: reqwest::Client,
    endpoint: String,
}

impl Default for Http {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl Http {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl Backend for Http {
    #[instrument(skip_all, fields(endpoint = %self.endpoint))]
    async fn upload(&self, image: Blob) -> Result<Reply> {
        let mut part = Part::bytes(image.bytes).file_name(FILE_NAME);

        if !image.mime.is_empty() {
            part = part.mime_str(&image.mime)?;
        }

        let form = Form::new().part(FIELD_NAME, part);

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?.to_vec();

        debug!("received {status} with {} bytes", body.len());

        Ok(Reply { status, body })
    }
}
