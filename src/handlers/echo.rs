use axum::{
    body::Bytes,
    http::{HeaderMap, Method, Uri},
    Json,
};

use crate::echo::assemble;
use crate::error::EchoError;
use crate::models::{EchoResponse, IncomingRequest};

/// Echo any request back as JSON.
pub async fn echo_request(
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<EchoResponse>, EchoError> {
    tracing::debug!(%method, %uri, body_len = body.len(), "Received request");
    let request = IncomingRequest::from_parts(&method, &uri, &headers, &body);
    let echo = assemble(&request)?;
    Ok(Json(echo))
}
