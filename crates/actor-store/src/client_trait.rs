//! # ActorClient Trait
//!
//! Common interface for domain-specific store clients: a wrapper supplies its inner
//! `ResourceClient` and an error mapping, and inherits `get`, `delete` and `count`.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for domain-specific clients to inherit the plain store operations.
///
/// # Example
///
/// ```rust
/// use actor_store::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
/// use std::cmp::Ordering;
///
/// #[derive(Clone, Debug)]
/// struct Note { id: u32 }
/// #[derive(Debug)] struct NoteCreate;
/// #[derive(Debug)] struct NoteUpdate;
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct NoteError(String);
///
/// #[async_trait]
/// impl ActorEntity for Note {
///     type Id = u32;
///     type Create = NoteCreate;
///     type Update = NoteUpdate;
///     type Filter = ();
///     type Error = NoteError;
///
///     fn from_create_params(id: u32, _: NoteCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
///     async fn on_update(&mut self, _: NoteUpdate) -> Result<(), Self::Error> { Ok(()) }
///     fn matches(&self, _: &()) -> bool { true }
///     fn cmp_order(&self, other: &Self) -> Ordering { self.id.cmp(&other.id) }
/// }
///
/// struct NoteClient {
///     inner: ResourceClient<Note>,
/// }
///
/// #[async_trait]
/// impl ActorClient<Note> for NoteClient {
///     type Error = NoteError;
///
///     fn inner(&self) -> &ResourceClient<Note> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         NoteError(e.to_string())
///     }
/// }
///
/// async fn usage(client: NoteClient) {
///     // get(), delete() and count() are provided automatically
///     let _ = client.get(1).await;
///     let _ = client.delete(1).await;
///     let _ = client.count(()).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The domain-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map store errors to the domain error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a record by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete a record by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }

    /// Count the records selected by `filter`.
    #[tracing::instrument(skip(self))]
    async fn count(&self, filter: T::Filter) -> Result<usize, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().count(filter).await.map_err(Self::map_error)
    }
}
