//! Development stand-in for the recipe service. Accepts the same upload as the real backend and
//! answers with a canned recipe.

use clap::Parser;
use thiserror::Error;
use tracing::error;

mod api;
mod config;

#[derive(Parser)]
struct Opt {
    /// Address to listen on, overrides chef-api.toml
    #[clap(long)]
    address: Option<String>,
}

/// Possible API errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Address parse failed: {0}")]
    AddrParseError(#[from] std::net::AddrParseError),
    #[error("Could not read configuration: {0}")]
    ConfigurationError(#[from] toml::de::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Multipart error: {0}")]
    MultipartError(#[from] axum::extract::multipart::MultipartError),
    #[error("No image field in upload")]
    MissingImage,
}

/// API result type.
pub type Result<T> = std::result::Result<T, AppError>;

async fn try_main() -> Result<()> {
    let opts = Opt::parse();
    let config = config::Config::new()?;
    let address = config.socket_addr(opts.address.as_deref())?;

    api::run(address).await
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(err) = try_main().await {
        error!("{}", err);
        std::process::exit(1);
    }
}
