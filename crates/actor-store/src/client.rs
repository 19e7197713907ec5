//! # Generic Client
//!
//! This module defines the generic client for communicating with a store actor.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::query::PageRequest;
use tokio::sync::{mpsc, oneshot};

/// ## ResourceClient
///
/// The `ResourceClient<T>` is the handle every request handler holds on the store. It forwards
/// each store primitive over a Tokio mpsc channel and awaits the reply on a oneshot channel.
/// It holds only a sender, so cloning is cheap and clones can be moved into any task.
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

// Derive would require `T: Clone` on the wrapper, which is not what we want to express.
impl<T: ActorEntity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, FrameworkError>>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Inserts a new record and returns it with its assigned ID.
    pub async fn create(&self, params: T::Create) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update {
            id,
            update,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }

    /// Number of records selected by `filter`, ignoring any paging.
    pub async fn count(&self, filter: T::Filter) -> Result<usize, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Count { filter, respond_to })
            .await
    }

    /// Ordered, windowed records selected by `filter`.
    pub async fn find_many(
        &self,
        filter: T::Filter,
        page: PageRequest,
    ) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::FindMany {
            filter,
            page,
            respond_to,
        })
        .await
    }
}
