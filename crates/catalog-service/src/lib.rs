//! # Catalog Service
//!
//! A product catalog exposed over HTTP: paginated, filtered listing plus create, update and
//! delete, backed by an in-process [`ResourceActor`](actor_store::ResourceActor) that owns
//! every product row.
//!
//! - **[model]**: [`Product`](model::Product), its filter and pagination types.
//! - **[product_actor]**: the store entity implementation and its errors.
//! - **[clients]**: [`ProductClient`](clients::ProductClient), the typed handle the API uses.
//! - **[api]**: axum router, handlers and the HTTP error mapping.
//! - **[config]** / **[lifecycle]**: settings, startup, graceful shutdown and tracing.
//!
//! See [`actor_store::mock`] for testing handlers against a scripted store.

pub mod api;
pub mod clients;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
