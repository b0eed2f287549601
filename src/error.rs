//! HTTP error boundary
//!
//! Maps domain failures onto HTTP responses. Handlers return
//! `Result<_, ApiError>` and use `?`; the `IntoResponse` impl renders the
//! `{"detail": ...}` body shape for every error path.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

use crate::store::StoreError;

/// Errors surfaced at the HTTP boundary.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The store is not configured/reachable. Write and detail paths
    /// surface this as 503; list paths never raise it.
    #[error("store unavailable")]
    StoreUnavailable,
    /// The request carried a malformed document id.
    #[error("invalid id")]
    InvalidId,
    /// A well-formed id matched no document.
    #[error("{0} not found")]
    NotFound(&'static str),
    /// A semantic precondition failed before schema validation.
    #[error("{0}")]
    BadRequest(String),
    /// Schema validation failed; carries the full per-field error map.
    #[error("validation failed")]
    Validation(#[from] ValidationErrors),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidId(_) => ApiError::InvalidId,
            StoreError::Unavailable | StoreError::Serialization(_) | StoreError::Backend(_) => {
                ApiError::StoreUnavailable
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::StoreUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                json!({ "detail": "Store unavailable" }),
            ),
            ApiError::InvalidId => (StatusCode::BAD_REQUEST, json!({ "detail": "Invalid id" })),
            ApiError::NotFound(entity) => (
                StatusCode::NOT_FOUND,
                json!({ "detail": format!("{entity} not found") }),
            ),
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, json!({ "detail": message }))
            }
            ApiError::Validation(errors) => {
                (StatusCode::UNPROCESSABLE_ENTITY, json!({ "detail": errors }))
            }
        };

        (status, Json(body)).into_response()
    }
}
