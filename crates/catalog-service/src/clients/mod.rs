//! Typed clients over the generic store.

pub mod product_client;

pub use product_client::ProductClient;
