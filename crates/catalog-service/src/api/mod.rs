//! # HTTP API
//!
//! The catalog's REST surface, served with axum on top of a [`ProductClient`].
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | GET | `/products` | [`handlers::list_products`] |
//! | POST | `/products`, `/products/add` | [`handlers::create_product`] |
//! | PUT | `/products/:id` | [`handlers::update_product`] |
//! | DELETE | `/products/:id` | [`handlers::delete_product`] |
//! | GET | `/health` | [`handlers::health`] |
//!
//! Any other method on a product path gets a 405 with an `Allow` header.

pub mod error;
pub mod handlers;
pub mod params;
pub mod payload;

use axum::http::Method;
use axum::routing::{get, post, put, MethodRouter};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::clients::ProductClient;
use crate::config::CatalogConfig;

pub use error::ApiError;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub products: ProductClient,
}

/// Product routes without middleware.
pub fn router(products: ProductClient) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/products",
            allow(
                get(handlers::list_products).post(handlers::create_product),
                "GET, POST",
            ),
        )
        .route(
            "/products/add",
            allow(post(handlers::create_product), "POST"),
        )
        .route(
            "/products/:id",
            allow(
                put(handlers::update_product).delete(handlers::delete_product),
                "PUT, DELETE",
            ),
        )
        .with_state(AppState { products })
}

/// The full application: routes plus request tracing and, if enabled, CORS.
pub fn app(products: ProductClient, config: &CatalogConfig) -> Router {
    let mut app = router(products).layer(TraceLayer::new_for_http());
    if config.cors {
        app = app.layer(CorsLayer::permissive());
    }
    app
}

fn allow(
    methods: MethodRouter<AppState>,
    allowed: &'static str,
) -> MethodRouter<AppState> {
    methods.fallback(move |method: Method| async move {
        error::method_not_allowed(method, allowed)
    })
}
