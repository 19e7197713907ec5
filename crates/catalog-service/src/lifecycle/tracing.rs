//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing_subscriber` formatter filtered by `RUST_LOG`.
//!
//! What gets logged:
//! - the store actor's startup, each write and its final size on shutdown, tagged with
//!   `entity_type`, `id` and `size` fields
//! - one span per client call (`#[instrument]`), with full payloads at `debug`
//! - one span per HTTP request from `TraceLayer`, and an `error!` for every 500
//!
//! ```bash
//! RUST_LOG=info cargo run -p catalog-service
//! RUST_LOG=debug,tower_http=debug cargo run -p catalog-service
//! ```

/// Initializes the global subscriber. Call once, before anything logs.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type identifies the store instead
        .compact()
        .init();
}
