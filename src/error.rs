//! Error types for the echo pipeline
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Errors that can occur while echoing a request
#[derive(Debug, Error)]
pub enum EchoError {
    /// Body declared as JSON but not parseable as JSON
    #[error("Failed to decode JSON body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Input was not a valid API Gateway proxy event
    #[error("Invalid proxy event: {0}")]
    Event(serde_json::Error),

    /// The echo could not be serialized
    #[error("Failed to encode echo: {0}")]
    Encode(serde_json::Error),

    /// Reading the event input failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for EchoError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Failed to echo request");
        let body = serde_json::json!({ "error": self.to_string() });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
