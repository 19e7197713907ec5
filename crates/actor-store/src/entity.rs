//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every record type must satisfy to be stored by a
//! [`ResourceActor`](crate::ResourceActor). It names the DTOs used to create and replace a
//! record, the filter type used by listings, and the error type raised when a record rejects
//! its own data.
//!
//! The actor never inspects record fields itself. Validation lives in
//! [`ActorEntity::from_create_params`] and [`ActorEntity::on_update`]; selection and ordering
//! live in [`ActorEntity::matches`] and [`ActorEntity::cmp_order`]. This keeps the actor loop
//! generic while every record type still decides what a valid row looks like.

use async_trait::async_trait;
use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record type must implement to be managed by `ResourceActor`.
///
/// # Associated Types
/// A store of `Product` accepts only `Product::Create` payloads and `Product::Filter`
/// predicates, and the compiler refuses anything else. There is no stringly-typed query language.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new record.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing record.
    type Update: Send + Sync + Debug;

    /// Predicate used by `Count` and `FindMany` requests.
    type Filter: Send + Sync + Debug;

    /// The error type for this entity.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full record from the assigned ID and the payload.
    ///
    /// Returning an error rejects the row; the ID that was reserved for it is not reused.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Apply an update to the stored record.
    ///
    /// Implementations must leave `self` untouched when they return an error.
    async fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;

    /// Whether this record is selected by `filter`.
    fn matches(&self, filter: &Self::Filter) -> bool;

    /// Listing order. `FindMany` sorts matching records with this before paging.
    fn cmp_order(&self, other: &Self) -> Ordering;
}
