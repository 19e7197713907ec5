use catalog_service::config::CatalogConfig;
use catalog_service::error::ServiceError;
use catalog_service::lifecycle::{serve, setup_tracing};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), ServiceError> {
    setup_tracing();

    let config = CatalogConfig::load().inspect_err(|e| error!(error = %e, "Invalid configuration"))?;
    info!(?config, "Starting catalog service");

    serve(config).await
}
