//! # Generic Store Actor
//!
//! This module defines the `ResourceActor`, the server side of the store. It owns every record
//! of one entity type and processes requests sequentially, so each single-record operation is
//! atomic with respect to every other one without any locking.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::query::PageRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns a collection of records.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Run**: Spawn `actor.run()` in a background task.
/// 3.  **Share**: Clone the client into every task that needs the store.
///
/// Dropping the last client closes the channel and ends the run loop.
///
/// # Operations
///
/// * **Create**: reserves the next ID from the `u32` counter, builds the record with
///   `T::from_create_params`, stores it and returns a copy. IDs are never reused, even when
///   the payload is rejected.
/// * **Get**: returns a copy of the record, or `None`.
/// * **Update**: calls `on_update` on the stored record and returns the new state.
///   Unknown IDs fail with `FrameworkError::NotFound`.
/// * **Delete**: removes the record. Unknown IDs fail with `FrameworkError::NotFound`.
/// * **Count**: number of records selected by the filter.
/// * **FindMany**: records selected by the filter, sorted by `cmp_order`, then windowed by
///   the `PageRequest`. A window past the end is simply empty.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the mailbox. When it is full, client calls wait
    /// for space.
    ///
    /// # Panics
    ///
    /// Panics if `buffer_size` is zero.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Product" instead of "catalog_service::model::product::Product")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    match T::from_create_params(id.clone(), params) {
                        Ok(item) => {
                            self.store.insert(id.clone(), item.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::entity(e)));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        if let Err(e) = item.on_update(update).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::entity(e)));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if self.store.remove(&id).is_some() {
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Count { filter, respond_to } => {
                    let total = self.store.values().filter(|item| item.matches(&filter)).count();
                    debug!(entity_type, ?filter, total, "Count");
                    let _ = respond_to.send(Ok(total));
                }
                ResourceRequest::FindMany {
                    filter,
                    page,
                    respond_to,
                } => {
                    let items = self.find_many(&filter, page);
                    debug!(entity_type, ?filter, ?page, returned = items.len(), "FindMany");
                    let _ = respond_to.send(Ok(items));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    fn find_many(&self, filter: &T::Filter, page: PageRequest) -> Vec<T> {
        let mut selected: Vec<&T> = self
            .store
            .values()
            .filter(|item| item.matches(filter))
            .collect();
        selected.sort_by(|a, b| a.cmp_order(b));
        selected
            .into_iter()
            .skip(page.skip)
            .take(page.take)
            .cloned()
            .collect()
    }
}
