use std::num::NonZeroUsize;

use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::clients::ProductClient;
use crate::error::ServiceError;
use crate::product_actor;

/// Owns the running product store.
///
/// The store actor exits once every [`ProductClient`] clone has been dropped, so
/// [`shutdown`](Self::shutdown) must run after the HTTP server (which holds clones) has stopped.
///
/// # Example
///
/// ```ignore
/// let system = CatalogSystem::new(config.store_buffer);
/// let cake = system.product_client.create_product(fields).await?;
/// system.shutdown().await?;
/// ```
pub struct CatalogSystem {
    pub product_client: ProductClient,
    handle: JoinHandle<()>,
}

impl CatalogSystem {
    /// Spawns the product store with a mailbox of `store_buffer` requests.
    pub fn new(store_buffer: NonZeroUsize) -> Self {
        let (actor, client) = product_actor::new(store_buffer.get());
        let handle = tokio::spawn(actor.run());
        Self {
            product_client: ProductClient::new(client),
            handle,
        }
    }

    /// Closes the store's mailbox and waits for the actor to drain it.
    pub async fn shutdown(self) -> Result<(), ServiceError> {
        info!("Shutting down product store...");
        drop(self.product_client);

        if let Err(e) = self.handle.await {
            error!("Store task failed: {:?}", e);
            return Err(e.into());
        }

        info!("Product store shutdown complete.");
        Ok(())
    }
}
