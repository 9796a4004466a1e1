use indexmap::IndexMap;
use serde::Serialize;

/// Decoded form fields keyed by name, in first-seen order.
pub type FormMap = IndexMap<String, FormValue>;

/// Request body after content-type driven parsing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NormalizedBody {
    /// Raw text, returned untouched (also used for the empty body)
    Text(String),
    /// Any JSON value parsed from an `application/json` body
    Json(serde_json::Value),
    /// Fields decoded from an `application/x-www-form-urlencoded` body
    Form(FormMap),
}

impl NormalizedBody {
    pub fn empty() -> Self {
        NormalizedBody::Text(String::new())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            NormalizedBody::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_form(&self) -> Option<&FormMap> {
        match self {
            NormalizedBody::Form(form) => Some(form),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FormValue {
    Single(String),
    Multi(Vec<String>),
}

impl FormValue {
    /// Add another occurrence of the same key. A single value becomes a list
    /// on the second occurrence and stays a list afterwards.
    pub fn push(&mut self, value: String) {
        match self {
            FormValue::Single(first) => {
                let first = std::mem::take(first);
                *self = FormValue::Multi(vec![first, value]);
            }
            FormValue::Multi(values) => values.push(value),
        }
    }

    #[cfg(test)]
    pub fn values(&self) -> Vec<&str> {
        match self {
            FormValue::Single(v) => vec![v.as_str()],
            FormValue::Multi(vs) => vs.iter().map(String::as_str).collect(),
        }
    }
}
