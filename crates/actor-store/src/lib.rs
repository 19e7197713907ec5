//! # Actor Store
//!
//! A typed, in-process record store built on the actor model. One [`ResourceActor`] owns every
//! record of one entity type; any number of cloned [`ResourceClient`]s talk to it over a
//! bounded channel. Because the actor handles one request at a time, every single-record
//! operation is atomic without locks, and the store is the only shared mutable state in the
//! process.
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]): what a record is, how it is created and replaced, how a
//!    filter selects it and how listings are ordered.
//! 2. **Runtime** ([`ResourceActor`]): the request loop and the `HashMap` of records.
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]): async, type-safe calls.
//!
//! ## Store Primitives
//!
//! | Request | Result | Failure |
//! |---|---|---|
//! | `create(params)` | the stored record, with its new ID | entity validation |
//! | `get(id)` | `Option<T>` | none |
//! | `update(id, update)` | the updated record | `NotFound`, entity validation |
//! | `delete(id)` | `()` | `NotFound` |
//! | `count(filter)` | `usize` | none |
//! | `find_many(filter, page)` | `Vec<T>`, ordered and windowed | none |
//!
//! Every call can also fail with [`FrameworkError::ActorClosed`] or
//! [`FrameworkError::ActorDropped`] once the actor is gone.
//!
//! ## Example
//!
//! ```rust
//! use actor_store::{ActorEntity, PageRequest, ResourceActor};
//! use async_trait::async_trait;
//! use std::cmp::Ordering;
//!
//! #[derive(Clone, Debug)]
//! struct City { id: u32, name: String }
//! #[derive(Debug)] struct CityCreate { name: String }
//! #[derive(Debug)] struct CityRename { name: String }
//! #[derive(Debug, thiserror::Error)] #[error("empty name")] struct CityError;
//!
//! #[async_trait]
//! impl ActorEntity for City {
//!     type Id = u32;
//!     type Create = CityCreate;
//!     type Update = CityRename;
//!     type Filter = Option<char>;
//!     type Error = CityError;
//!
//!     fn from_create_params(id: u32, params: CityCreate) -> Result<Self, Self::Error> {
//!         if params.name.is_empty() { return Err(CityError); }
//!         Ok(Self { id, name: params.name })
//!     }
//!     async fn on_update(&mut self, update: CityRename) -> Result<(), Self::Error> {
//!         self.name = update.name;
//!         Ok(())
//!     }
//!     fn matches(&self, initial: &Option<char>) -> bool {
//!         initial.map_or(true, |c| self.name.starts_with(c))
//!     }
//!     fn cmp_order(&self, other: &Self) -> Ordering { self.name.cmp(&other.name) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<City>::new(10);
//!     tokio::spawn(actor.run());
//!
//!     for name in ["Lyon", "Lille", "Nice"] {
//!         client.create(CityCreate { name: name.into() }).await.unwrap();
//!     }
//!
//!     assert_eq!(client.count(Some('L')).await.unwrap(), 2);
//!     let first = client.find_many(Some('L'), PageRequest::new(0, 1)).await.unwrap();
//!     assert_eq!(first[0].name, "Lille");
//! }
//! ```
//!
//! ## Testing
//!
//! The [`mock`] module provides `MockClient`, which answers client calls from scripted
//! expectations so code around the store can be tested without a running actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod query;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use query::PageRequest;
