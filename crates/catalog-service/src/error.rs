//! Startup and shutdown failures of the service process.

use std::net::AddrParseError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid listen address {addr:?}: {source}")]
    Address {
        addr: String,
        source: AddrParseError,
    },

    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store task failed: {0}")]
    StoreTask(#[from] tokio::task::JoinError),
}
