//! # Product Store
//!
//! The product table, held by a [`ResourceActor`] that owns every [`Product`] row.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_store::ActorEntity) implementation for [`Product`]:
//!   column constraints, filter evaluation and listing order
//! - [`error`] - [`ProductError`]
//! - [`new()`] - Factory function that creates the actor and its client
//!
//! ## Usage
//!
//! ```rust
//! use actor_store::ActorClient;
//! use catalog_service::clients::ProductClient;
//! use catalog_service::model::{PageParams, ProductFields, ProductFilter};
//! use catalog_service::product_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = product_actor::new(32);
//!     let client = ProductClient::new(generic_client);
//!     tokio::spawn(actor.run());
//!
//!     let cake = client
//!         .create_product(ProductFields::new(
//!             "Lemon Cake",
//!             "Zesty lemon cake with lemon glaze.",
//!             18.99,
//!             25,
//!             "https://example.com/images/lemon-cake.jpg",
//!         ))
//!         .await?;
//!
//!     let page = client
//!         .list_products(ProductFilter::builder().name_contains("lemon").build(), PageParams::default())
//!         .await?;
//!     assert_eq!(page.data, vec![cake.clone()]);
//!
//!     client.delete(cake.id).await?;
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Product;
use actor_store::{ResourceActor, ResourceClient};

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ResourceClient<Product>) {
    ResourceActor::new(buffer_size)
}
