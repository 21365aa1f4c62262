//! Transport-safe encoding of serialized event data.
//!
//! The same token format is used for the persisted slot and for share
//! links, so the encoding has to survive both a stored value and a URL
//! query parameter unmodified. URL-safe base64 covers both.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;

use crate::error::{PerennialError, PerennialResult};

/// Encode arbitrary text into a transport token.
pub fn encode(text: &str) -> String {
    URL_SAFE.encode(text.as_bytes())
}

/// Decode a transport token back into text.
///
/// Fails on malformed padding, characters outside the alphabet, or a
/// payload that is not valid UTF-8. Callers treat failure as "no shared
/// data available" and leave their current state untouched.
pub fn decode(token: &str) -> PerennialResult<String> {
    let bytes = URL_SAFE
        .decode(token.trim().as_bytes())
        .map_err(|e| PerennialError::Decode(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| PerennialError::Decode(e.to_string()))
}
