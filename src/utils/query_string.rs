use super::url_encoding::decode_token;
use crate::models::{MultiValueQueryParameters, QueryParameters};

/// Parse a raw query string into single-value and multi-value maps.
///
/// The single-value map keeps the last value seen for each key, the
/// multi-value map keeps every value in order.
pub fn parse_query(raw: &str) -> (QueryParameters, MultiValueQueryParameters) {
    let mut single = QueryParameters::new();
    let mut multi = MultiValueQueryParameters::new();
    for pair in raw.split('&') {
        if pair.is_empty() { continue; }
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = decode_token(key);
        let value = decode_token(value);
        single.insert(key.clone(), value.clone());
        multi.entry(key).or_default().push(value);
    }
    (single, multi)
}
