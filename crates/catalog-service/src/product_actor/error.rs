//! Error types for the product store.

use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// Price is negative, NaN or infinite.
    #[error("Invalid price: {0}")]
    InvalidPrice(f64),

    /// The store rejected the request or is unreachable.
    #[error("Store error: {0}")]
    StoreError(String),
}
