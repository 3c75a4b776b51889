use crate::Result;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

const DEFAULT_ADDRESS: &str = "0.0.0.0:8000";

/// Server configuration.
#[derive(Debug, PartialEq)]
pub struct Config {
    /// Listen address. By default this is 0.0.0.0:8000.
    pub address: String,
}

#[derive(Deserialize)]
struct Serialized {
    #[serde(default)]
    address: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
        }
    }
}

impl Config {
    /// Read from chef-api.toml or return some defaults.
    pub fn new() -> Result<Self> {
        Self::from_path(&PathBuf::from("chef-api.toml"))
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
            address: config
                .address
                .unwrap_or_else(|| DEFAULT_ADDRESS.to_string()),
        })
    }

    /// Listen address, `address` taking precedence over the configured one.
    pub fn socket_addr(&self, address: Option<&str>) -> Result<SocketAddr> {
        Ok(address.unwrap_or(self.address.as_str()).parse()?)
    }
}
