use crate::error::EchoError;
use crate::models::{EchoResponse, Headers, IncomingRequest};
use crate::normalize::normalize;

/// Build the echo for a request: every field copied verbatim, body normalized.
pub fn assemble(request: &IncomingRequest) -> Result<EchoResponse, EchoError> {
    let body = match &request.headers {
        Some(headers) => normalize(&request.body, headers)?,
        None => normalize(&request.body, &Headers::new())?,
    };
    Ok(EchoResponse {
        method: request.method.clone(),
        query_parameters: request.query_parameters.clone(),
        multi_value_query_parameters: request.multi_value_query_parameters.clone(),
        body,
        headers: request.headers.clone(),
    })
}
