use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EscapeError {
    #[error("invalid URL escape {0:?}")]
    InvalidEscape(String),
}

/// Unescape a query-string component: `+` becomes a space and `%XX` becomes the
/// byte `0xXX`. Decoded bytes that are not valid UTF-8 are replaced with U+FFFD.
/// Fails when a `%` is not followed by two hex digits.
pub fn query_unescape(raw: &str) -> Result<String, EscapeError> {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'%' {
            i += 1;
            continue;
        }
        match bytes.get(i + 1..i + 3) {
            Some(hex) if hex.iter().all(u8::is_ascii_hexdigit) => i += 3,
            _ => {
                let end = (i + 3).min(bytes.len());
                return Err(EscapeError::InvalidEscape(
                    String::from_utf8_lossy(&bytes[i..end]).into_owned(),
                ));
            }
        }
    }
    let spaced = raw.replace('+', " ");
    let decoded = urlencoding::decode_binary(spaced.as_bytes());
    Ok(String::from_utf8_lossy(&decoded).into_owned())
}

/// Trim and unescape a single form or query token.
///
/// A malformed escape is not fatal: the trimmed token is kept as-is.
pub fn decode_token(raw: &str) -> String {
    let trimmed = raw.trim();
    match query_unescape(trimmed) {
        Ok(decoded) => decoded,
        Err(e) => {
            tracing::warn!(token = raw, error = %e, "Failed to decode token, keeping it undecoded");
            trimmed.to_string()
        }
    }
}
