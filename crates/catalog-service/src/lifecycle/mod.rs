//! # Service Lifecycle
//!
//! Starting and stopping the catalog: the product store actor, the HTTP server in front
//! of it, and the tracing subscriber.
//!
//! ## Shutdown order
//!
//! 1. Ctrl+C or SIGTERM stops the server from accepting connections; in-flight requests finish.
//! 2. The router, and every [`ProductClient`](crate::clients::ProductClient) clone it held, is dropped.
//! 3. [`CatalogSystem::shutdown`] drops the last client. The store's mailbox closes, the
//!    actor logs its final size and exits, and the task is awaited.
//!
//! If a client clone is still alive somewhere, step 3 waits for it.

pub mod catalog_system;
pub mod server;
pub mod tracing;

pub use catalog_system::*;
pub use server::*;
pub use self::tracing::*;
