mod components;
mod config;

use clap::Parser;
use client::backend::http::Http;
use client::backend::mock::Mock;
use client::{Backend, Session};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Parser)]
#[clap(about = "Photograph your groceries, get a recipe and a shopping list")]
struct Opt {
    /// Use a mock backend answering with the example recipe
    #[clap(long)]
    use_mock: bool,

    /// Recipe service to upload to, overrides chef.toml
    #[clap(long)]
    endpoint: Option<String>,

    /// Print the recipe as JSON instead of text
    #[clap(long)]
    json: bool,

    /// Image to upload. Only the first one is used.
    images: Vec<PathBuf>,
}

/// Possible app errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    ClientError(#[from] client::Error),
    #[error("Could not read configuration: {0}")]
    ConfigurationError(#[from] toml::de::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// App result type.
pub type Result<T> = std::result::Result<T, AppError>;

async fn run<B: Backend>(session: Session<B>, opts: &Opt) -> Result<()> {
    session.select(&opts.images).await?;

    match session.submit().await {
        Err(client::Error::NoImage) => return Ok(()),
        result => result?,
    }

    let state = session.state();

    if opts.json {
        let response = state.response.unwrap_or_default();
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print!("{}", components::page(&state));
    }

    Ok(())
}

async fn try_main() -> Result<()> {
    let opts = Opt::parse();
    let config = config::Config::new()?;

    if opts.images.is_empty() {
        warn!("No image given");
    }

    if opts.use_mock {
        let backend = Mock::recipe(&models::example())?;
        run(Session::new(backend), &opts).await
    } else {
        let endpoint = opts.endpoint.clone().unwrap_or(config.endpoint);
        info!("Uploading to {endpoint}");
        run(Session::new(Http::new(endpoint)), &opts).await
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(err) = try_main().await {
        error!("{}", err);
        std::process::exit(1);
    }
}
