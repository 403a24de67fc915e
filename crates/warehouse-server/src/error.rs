//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for all endpoints. Every variant
//! renders as `{"error": "<message>"}` with the matching status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use warehouse_core::CoreError;

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Unknown warehouse id (404).
    #[error("Warehouse not found")]
    NotFound,

    /// Body missing, not JSON, or not a JSON object (400).
    #[error("{0}")]
    BadRequest(String),

    /// Input rejected by strict validation (422).
    #[error(transparent)]
    ValidationFailed(#[from] CoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::ValidationFailed(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
