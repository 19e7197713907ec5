use std::net::{IpAddr, SocketAddr};
use std::num::NonZeroUsize;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::error::ServiceError;

/// Default location of the optional config file, relative to the working directory.
pub const CONFIG_FILE: &str = "config/catalog";

const DEFAULT_STORE_BUFFER: NonZeroUsize = match NonZeroUsize::new(32) {
    Some(n) => n,
    None => unreachable!(),
};

/// Runtime settings for the catalog service.
///
/// Sources, lowest precedence first: built-in defaults, the optional file
/// `config/catalog.{toml,yaml,json}`, then `CATALOG__*` environment variables
/// (e.g. `CATALOG__PORT=8080`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub host: String,
    pub port: u16,
    /// Mailbox capacity of the product store. Zero is rejected at load time.
    pub store_buffer: NonZeroUsize,
    pub cors: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            store_buffer: DEFAULT_STORE_BUFFER,
            cors: true,
        }
    }
}

impl CatalogConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(CONFIG_FILE)
    }

    /// Loads from `path` (a missing file is not an error) and the environment.
    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix("CATALOG")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ServiceError> {
        let ip: IpAddr = self.host.parse().map_err(|source| ServiceError::Address {
            addr: self.host.clone(),
            source,
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
