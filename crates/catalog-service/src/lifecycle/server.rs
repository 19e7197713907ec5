use tokio::net::TcpListener;
use tracing::{info, warn};

use super::CatalogSystem;
use crate::api;
use crate::config::CatalogConfig;
use crate::error::ServiceError;

/// Starts the store, serves the API until Ctrl+C or SIGTERM, then stops the store.
pub async fn serve(config: CatalogConfig) -> Result<(), ServiceError> {
    let addr = config.socket_addr()?;
    let system = CatalogSystem::new(config.store_buffer);
    let app = api::app(system.product_client.clone(), &config);

    let listener = TcpListener::bind(addr).await?;
    info!(%addr, cors = config.cors, "Catalog service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    system.shutdown().await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down gracefully"),
        () = terminate => info!("Received SIGTERM, shutting down gracefully"),
    }
}
