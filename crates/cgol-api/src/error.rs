//! Error types for the word endpoint.
//!
//! [`ApiError`] unifies the failure modes of a request into a single enum
//! that converts into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors that can occur while serving a request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The simulation did not finish before the request deadline.
    #[error("simulation exceeded the {timeout_ms} ms deadline")]
    Timeout {
        /// The configured deadline.
        timeout_ms: u128,
    },

    /// The blocking worker running the simulation failed.
    #[error("simulation worker failed: {0}")]
    Worker(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            Self::Worker(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
