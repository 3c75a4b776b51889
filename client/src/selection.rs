//! Turning a user-chosen file into a [`SelectedImage`].

use crate::dataurl::{self, Blob};
use crate::Result;
use image::ImageFormat;
use std::path::Path;
use tracing::{debug, instrument};

const UNKNOWN_MIME: &str = "application/octet-stream";

/// An image held as a data URL. The URL doubles as the preview; [`SelectedImage::blob`] yields
/// the bytes that go over the wire.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedImage {
    name: String,
    data_url: String,
}

impl SelectedImage {
    pub fn new(name: impl Into<String>, bytes: &[u8], mime: &str) -> Self {
        Self {
            name: name.into(),
            data_url: dataurl::encode(bytes, mime),
        }
    }

    /// Wrap a data URL obtained elsewhere, e.g. from a browser file reader.
    pub fn from_data_url(name: impl Into<String>, data_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_url: data_url.into(),
        }
    }

    /// Read the file at `path` and label it with its detected MIME type.
    #[instrument]
    pub async fn read(path: &Path) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let mime = detect_mime(path, &bytes);
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        debug!("read {} bytes of {mime}", bytes.len());

        Ok(Self::new(name, &bytes, mime))
    }

    /// File name of the source, empty if unknown.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data_url(&self) -> &str {
        &self.data_url
    }

    /// Decode the stored data URL back into bytes and MIME type.
    pub fn blob(&self) -> Result<Blob> {
        dataurl::decode(&self.data_url)
    }
}

/// Sniff the magic bytes first, then fall back to the file extension.
pub fn detect_mime(path: &Path, bytes: &[u8]) -> &'static str {
    image::guess_format(bytes)
        .or_else(|_| ImageFormat::from_path(path))
        .map(|format| format.to_mime_type())
        .unwrap_or(UNKNOWN_MIME)
}
