//! Content-type driven body normalization.
//!
//! JSON bodies are parsed into a [`serde_json::Value`], form-urlencoded bodies are
//! decoded into a [`FormMap`] and everything else is passed through as text.
use indexmap::map::Entry;

use crate::error::EchoError;
use crate::models::{FormMap, FormValue, Headers, NormalizedBody};
use crate::utils::{decode_token, find_header};

pub const CONTENT_TYPE_HEADER: &str = "content-type";
pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Parsing strategy selected from the content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Json,
    Form,
    Raw,
}

impl BodyKind {
    /// Pick a strategy by substring match on an already lowercased content type,
    /// so parameters such as `; charset=utf-8` do not matter.
    pub fn from_content_type(content_type: &str) -> Self {
        if content_type.contains(JSON_CONTENT_TYPE) {
            BodyKind::Json
        } else if content_type.contains(FORM_CONTENT_TYPE) {
            BodyKind::Form
        } else {
            BodyKind::Raw
        }
    }
}

/// Lowercased content type, or an empty string when the header is absent.
pub fn content_type(headers: &Headers) -> String {
    find_header(headers, CONTENT_TYPE_HEADER)
        .map(str::to_lowercase)
        .unwrap_or_default()
}

/// Normalize a raw body according to the request's content type.
///
/// Only a JSON body that fails to parse is an error. Form decoding never fails;
/// malformed escapes degrade per token.
pub fn normalize(raw_body: &str, headers: &Headers) -> Result<NormalizedBody, EchoError> {
    if raw_body.is_empty() {
        return Ok(NormalizedBody::empty());
    }
    match BodyKind::from_content_type(&content_type(headers)) {
        BodyKind::Json => Ok(NormalizedBody::Json(serde_json::from_str(raw_body)?)),
        BodyKind::Form => Ok(NormalizedBody::Form(decode_form(raw_body))),
        BodyKind::Raw => Ok(NormalizedBody::Text(raw_body.to_string())),
    }
}

/// Decode a form-urlencoded body.
///
/// Pairs are split at the first `=`; a pair without `=` gets an empty value and
/// empty pairs are skipped. Repeated keys collect their values in order.
pub fn decode_form(raw: &str) -> FormMap {
    let mut form = FormMap::new();
    for pair in raw.split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = decode_token(key);
        let value = decode_token(value);
        match form.entry(key) {
            Entry::Occupied(mut slot) => slot.get_mut().push(value),
            Entry::Vacant(slot) => {
                slot.insert(FormValue::Single(value));
            }
        }
    }
    form
}
