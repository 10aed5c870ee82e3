//! RFC 2047 MIME header encoding.
//!
//! `Subject` values may carry arbitrary UTF-8; on the wire they become
//! `=?UTF-8?B?...?=` encoded words. Only the B (Base64) encoding is
//! produced or consumed here.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::{Error, Result};

/// Charset label used in encoded words.
const CHARSET: &str = "UTF-8";

/// Encodes a header value as an RFC 2047 encoded word when needed.
///
/// Plain ASCII text free of the `=?` marker passes through untouched;
/// anything else is wrapped in a single B-encoded word.
#[must_use]
pub fn encode_header(text: &str) -> String {
    if text.is_ascii() && !text.contains("=?") {
        return text.to_string();
    }

    format!("=?{CHARSET}?B?{}?=", STANDARD.encode(text.as_bytes()))
}

/// Decodes an RFC 2047 encoded word produced by [`encode_header`].
///
/// Text that is not an encoded word passes through untouched.
///
/// # Errors
///
/// Returns an error for a malformed encoded word, an encoding other
/// than B, or invalid Base64/UTF-8 payloads.
pub fn decode_header(text: &str) -> Result<String> {
    let Some(inner) = text.strip_prefix("=?").and_then(|t| t.strip_suffix("?=")) else {
        return Ok(text.to_string());
    };

    let parts: Vec<&str> = inner.split('?').collect();
    if parts.len() != 3 {
        return Err(Error::InvalidEncoding(
            "expected =?charset?B?text?= form".to_string(),
        ));
    }

    if !parts[1].eq_ignore_ascii_case("B") {
        return Err(Error::InvalidEncoding(format!(
            "unsupported encoding: {}",
            parts[1]
        )));
    }

    let decoded = STANDARD.decode(parts[2])?;
    String::from_utf8(decoded).map_err(Into::into)
}
