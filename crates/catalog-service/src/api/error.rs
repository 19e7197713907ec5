//! HTTP error mapping.
//!
//! The catalog has a flat error model: a missing field on create is a 400, a wrong
//! method is a 405, and every other failure is an opaque 500 carrying the operation's
//! message and the underlying error text.

use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

pub const FIELDS_REQUIRED: &str = "All fields are required";
pub const FETCH_FAILED: &str = "Error fetching products";
pub const CREATE_FAILED: &str = "Error creating product";
pub const UPDATE_FAILED: &str = "Error updating product";
pub const DELETE_FAILED: &str = "Error deleting product";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(&'static str),

    #[error("{message}: {error}")]
    Internal {
        message: &'static str,
        error: String,
    },
}

impl ApiError {
    pub fn internal(message: &'static str, error: impl ToString) -> Self {
        Self::Internal {
            message,
            error: error.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(message) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    message,
                    error: None,
                }),
            )
                .into_response(),
            Self::Internal { message, error } => {
                error!(%error, "{message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        message,
                        error: Some(error),
                    }),
                )
                    .into_response()
            }
        }
    }
}

/// 405 response listing the methods a path accepts.
pub fn method_not_allowed(method: Method, allow: &'static str) -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, allow)],
        format!("Method {method} Not Allowed"),
    )
        .into_response()
}
