use serde::Serialize;

use super::normalized_body::NormalizedBody;
use super::{Headers, MultiValueQueryParameters, QueryParameters};

/// JSON description of an echoed request.
///
/// Mirrors the inbound fields verbatim; only `body` is transformed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EchoResponse {
    pub method: String,
    pub query_parameters: Option<QueryParameters>,
    pub multi_value_query_parameters: Option<MultiValueQueryParameters>,
    pub body: NormalizedBody,
    pub headers: Option<Headers>,
}
