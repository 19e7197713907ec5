use actor_store::ActorClient;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::{debug, info, warn};

use super::error::{
    ApiError, CREATE_FAILED, DELETE_FAILED, FETCH_FAILED, FIELDS_REQUIRED, UPDATE_FAILED,
};
use super::params::ListParams;
use super::payload::ProductPayload;
use super::AppState;
use crate::model::{Product, ProductId, ProductPage};

/// `GET /products`
///
/// A query string that fails to deserialize at all is treated like an empty one.
pub async fn list_products(
    State(state): State<AppState>,
    query: Option<Query<ListParams>>,
) -> Result<Json<ProductPage>, ApiError> {
    let params = query.map(|Query(params)| params).unwrap_or_default();
    let filter = params.filter();
    let page_params = params.page_params();
    debug!(?filter, ?page_params, "Listing products");

    let page = state
        .products
        .list_products(filter, page_params)
        .await
        .map_err(|e| ApiError::internal(FETCH_FAILED, e))?;
    Ok(Json(page))
}

/// `POST /products` and `POST /products/add`
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let Json(payload) = payload.map_err(|rejection| {
        warn!(error = %rejection, "Rejected create body");
        ApiError::Validation(FIELDS_REQUIRED)
    })?;

    let fields = payload.into_fields().map_err(|e| {
        if e.is_missing() {
            warn!(error = %e, "Rejected create body");
            ApiError::Validation(FIELDS_REQUIRED)
        } else {
            ApiError::internal(CREATE_FAILED, e)
        }
    })?;

    let product = state
        .products
        .create_product(fields)
        .await
        .map_err(|e| ApiError::internal(CREATE_FAILED, e))?;
    info!(id = %product.id, "Product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// `PUT /products/:id`
///
/// No 400 path here: a bad id, body or field is reported as a failed update.
pub async fn update_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<Json<Product>, ApiError> {
    let id = parse_id(&raw_id).map_err(|e| ApiError::internal(UPDATE_FAILED, e))?;
    let Json(payload) = payload.map_err(|e| ApiError::internal(UPDATE_FAILED, e))?;
    let fields = payload
        .into_fields()
        .map_err(|e| ApiError::internal(UPDATE_FAILED, e))?;

    let product = state
        .products
        .update_product(id, fields)
        .await
        .map_err(|e| ApiError::internal(UPDATE_FAILED, e))?;
    info!(%id, "Product updated");
    Ok(Json(product))
}

/// `DELETE /products/:id`
pub async fn delete_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&raw_id).map_err(|e| ApiError::internal(DELETE_FAILED, e))?;
    state
        .products
        .delete(id)
        .await
        .map_err(|e| ApiError::internal(DELETE_FAILED, e))?;
    info!(%id, "Product deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /health`
pub async fn health() -> &'static str {
    "OK"
}

fn parse_id(raw: &str) -> Result<ProductId, String> {
    raw.parse()
        .map_err(|e| format!("Invalid product id {raw:?}: {e}"))
}
