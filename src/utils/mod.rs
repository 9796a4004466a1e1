// URL handling utilities
pub mod url_encoding;
pub mod query_string;

// Header utilities
pub mod headers;

pub use url_encoding::{decode_token, query_unescape, EscapeError};
pub use query_string::parse_query;
pub use headers::find_header;
