use axum::http::{HeaderMap, Method, Uri};

use super::{Headers, MultiValueQueryParameters, QueryParameters};
use crate::utils::parse_query;

/// A request as delivered by a transport, before its body is normalized.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IncomingRequest {
    pub method: String,
    pub headers: Option<Headers>,
    pub query_parameters: Option<QueryParameters>,
    pub multi_value_query_parameters: Option<MultiValueQueryParameters>,
    pub body: String,
}

impl IncomingRequest {
    /// Build from the pieces of an HTTP request.
    ///
    /// Repeated headers keep their first position and their last value. Header
    /// values that are not valid UTF-8 are decoded lossily. Without a query string
    /// both query maps are `None`.
    pub fn from_parts(method: &Method, uri: &Uri, header_map: &HeaderMap, body: &[u8]) -> Self {
        let mut headers = Headers::new();
        for (name, value) in header_map {
            let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
            headers.insert(name.as_str().to_string(), value);
        }

        let (query_parameters, multi_value_query_parameters) = match uri.query() {
            Some(q) if !q.is_empty() => {
                let (single, multi) = parse_query(q);
                (Some(single), Some(multi))
            }
            _ => (None, None),
        };

        IncomingRequest {
            method: method.as_str().to_string(),
            headers: Some(headers),
            query_parameters,
            multi_value_query_parameters,
            body: String::from_utf8_lossy(body).into_owned(),
        }
    }
}
