pub mod http;
pub mod mock;

use crate::{Blob, Result};
use reqwest::StatusCode;

/// Name of the multipart field carrying the image.
pub const FIELD_NAME: &str = "image";

/// File name announced for the uploaded image.
pub const FILE_NAME: &str = "uploaded-image.png";

/// Default endpoint of the recipe backend.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000";

/// Raw answer of the backend, before any interpretation.
#[derive(Clone, Debug)]
pub struct Reply {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

/// A service turning an uploaded image into a recipe.
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    /// Send `image` as a single multipart upload and return whatever came back.
    async fn upload(&self, image: Blob) -> Result<Reply>;
}
