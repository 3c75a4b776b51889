use crate::Result;
use client::backend::DEFAULT_ENDPOINT;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// App configuration.
#[derive(Debug, PartialEq)]
pub struct Config {
    /// URL of the recipe service. By default this is http://localhost:8000.
    pub endpoint: String,
}

#[derive(Deserialize)]
struct Serialized {
    #[serde(default)]
    endpoint: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl Config {
    /// Read from chef.toml or return some defaults.
    pub fn new() -> Result<Self> {
        Self::from_path(&PathBuf::from("chef.toml"))
    }

    fn from_path(path: &Path) -> Result<Self> {
        if path.exists() && path.is_file() {
            let content = std::fs::read_to_string(path)?;
            Self::parse(&content)
        } else {
            Ok(Self::default())
        }
    }

    fn parse(content: &str) -> Result<Self> {
        let config: Serialized = toml::from_str(content)?;

        Ok(Self {
            endpoint: config
                .endpoint
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        })
    }
}
