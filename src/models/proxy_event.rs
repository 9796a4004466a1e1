//! API Gateway proxy integration shapes.
//!
//! Only the fields the echo needs are read; everything else in the event
//! (request context, stage variables, ...) is ignored.
use serde::{Deserialize, Serialize};

use super::{Headers, IncomingRequest, MultiValueQueryParameters, QueryParameters};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRequest {
    #[serde(default)]
    pub http_method: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub headers: Option<Headers>,
    #[serde(default)]
    pub query_string_parameters: Option<QueryParameters>,
    #[serde(default)]
    pub multi_value_query_string_parameters: Option<MultiValueQueryParameters>,
    #[serde(default)]
    pub body: Option<String>,
}

impl From<ProxyRequest> for IncomingRequest {
    fn from(event: ProxyRequest) -> Self {
        IncomingRequest {
            method: event.http_method,
            headers: event.headers,
            query_parameters: event.query_string_parameters,
            multi_value_query_parameters: event.multi_value_query_string_parameters,
            body: event.body.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status_code: u16,
    pub body: String,
}

impl ProxyResponse {
    pub fn ok(body: String) -> Self {
        ProxyResponse { status_code: 200, body }
    }
}
