//! # Store Errors
//!
//! Errors raised by the store itself, as opposed to the entity's own validation errors,
//! which travel inside [`FrameworkError::EntityError`].

/// Errors that can occur within the store.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Wraps an entity's own validation error.
    pub fn entity<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::EntityError(Box::new(error))
    }
}
