//! Consistent error responses for expected handler failures.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use userhub_core::DomainError;

use crate::middleware::INTERNAL_ERROR_MESSAGE;

/// Failures a handler surfaces as values.
///
/// Expected failures map to their client status; anything internal collapses
/// to the fixed 500 surface with detail logged server-side only.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Domain(DomainError::Validation(msg)) => {
                json_error(StatusCode::BAD_REQUEST, msg)
            }
            ApiError::Domain(DomainError::InvalidId(msg)) => {
                json_error(StatusCode::BAD_REQUEST, msg)
            }
            ApiError::Domain(DomainError::NotFound) => {
                json_error(StatusCode::NOT_FOUND, "user not found")
            }
            ApiError::Domain(DomainError::Conflict(msg)) => json_error(StatusCode::CONFLICT, msg),
            ApiError::Internal(detail) => {
                tracing::error!(%detail, "handler failure");
                json_error(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
            }
        }
    }
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}
