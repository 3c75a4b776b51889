//! Image acquisition and recipe submission against the chef backend.

pub mod backend;
pub mod dataurl;
pub mod selection;
pub mod session;
pub mod state;

pub use backend::Backend;
pub use dataurl::Blob;
pub use selection::SelectedImage;
pub use session::Session;
pub use state::{Event, Stage, State};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Malformed data URL: {0}")]
    MalformedDataUrl(&'static str),
    #[error("Invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Connection failed: {0}")]
    Connection(String),
    #[error("Server returned {0}")]
    Status(reqwest::StatusCode),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("No image selected to upload")]
    NoImage,
    #[error("Submission is ongoing")]
    SubmissionOngoing,
}

pub type Result<T> = std::result::Result<T, Error>;
