//! Error types for the telemetry API layer.
//!
//! [`ApiError`] unifies all failure modes into a single enum that converts
//! into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors that can occur in the telemetry API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request carried a malformed or out-of-range value.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The backing store could not be read or written.
    #[error("store unavailable: {0}")]
    Store(String),
}

impl ApiError {
    /// Wrap a store failure. The API performs no retries; the error
    /// surfaces to the caller as-is.
    pub fn store(err: impl std::fmt::Display) -> Self {
        Self::Store(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::Store(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg.clone()),
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
