use std::path::Path;

use tokio::io::{AsyncRead, AsyncReadExt};

use crate::echo::assemble;
use crate::error::EchoError;
use crate::models::{IncomingRequest, ProxyRequest, ProxyResponse};

/// Echo an API Gateway proxy event.
///
/// The serialized echo becomes the body of a `200` proxy response. A JSON body
/// that fails to decode fails the whole invocation.
pub fn handle_proxy_event(event: ProxyRequest) -> Result<ProxyResponse, EchoError> {
    tracing::info!(method = %event.http_method, path = %event.path, "Received proxy event");
    tracing::debug!(?event, "Proxy event");
    let request = IncomingRequest::from(event);
    let echo = assemble(&request)?;
    let body = serde_json::to_string(&echo).map_err(EchoError::Encode)?;
    Ok(ProxyResponse::ok(body))
}

/// Parse a raw proxy event and echo it.
pub fn handle_proxy_event_json(raw: &str) -> Result<ProxyResponse, EchoError> {
    let event: ProxyRequest = serde_json::from_str(raw).map_err(EchoError::Event)?;
    handle_proxy_event(event)
}

/// Read a proxy event from `reader` and return the serialized proxy response.
pub async fn invoke_from<R: AsyncRead + Unpin>(mut reader: R) -> Result<String, EchoError> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw).await?;
    let response = handle_proxy_event_json(&raw)?;
    serde_json::to_string(&response).map_err(EchoError::Encode)
}

/// Like [`invoke_from`], reading the event from a file.
pub async fn invoke_from_path(path: impl AsRef<Path>) -> Result<String, EchoError> {
    let file = tokio::fs::File::open(path).await?;
    invoke_from(file).await
}
