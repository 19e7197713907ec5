//! # Generic Messages
//!
//! Request messages sent from a `ResourceClient` to its `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::query::PageRequest;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants are the store primitives: the CRUD lifecycle of a single record plus the two
/// read operations a listing needs (`Count` and `FindMany`). Each variant carries the
/// entity's own associated types, so one entity's payload can never reach another entity's store.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Count {
        filter: T::Filter,
        respond_to: Response<usize>,
    },
    FindMany {
        filter: T::Filter,
        page: PageRequest,
        respond_to: Response<Vec<T>>,
    },
}

impl<T: ActorEntity> ResourceRequest<T> {
    /// Name of the requested operation, for logs and test diagnostics.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::Create { .. } => "Create",
            Self::Get { .. } => "Get",
            Self::Update { .. } => "Update",
            Self::Delete { .. } => "Delete",
            Self::Count { .. } => "Count",
            Self::FindMany { .. } => "FindMany",
        }
    }
}
