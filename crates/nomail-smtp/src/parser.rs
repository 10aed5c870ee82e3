//! SMTP reply-line parsing.

use crate::error::{Error, Result};
use crate::types::ReplyCode;

/// Extracts the reply code from a single reply line.
///
/// The first three bytes must be ASCII digits; whatever follows them
/// (a space and text, or the `-` continuation marker of a multi-line
/// reply) is ignored:
///
/// - `250 OK` parses to 250
/// - `250-PIPELINING` parses to 250
/// - `OK` is a protocol error naming the raw line
///
/// # Errors
///
/// Returns [`Error::Protocol`] if the line carries no leading numeric
/// code.
pub fn parse_code(line: &str) -> Result<ReplyCode> {
    let line = line.trim_end();

    let code = line
        .get(..3)
        .filter(|prefix| prefix.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|prefix| prefix.parse::<u16>().ok())
        .ok_or_else(|| {
            Error::protocol(format!(
                "SMTP response does not contain a reply code, see: {line}"
            ))
        })?;

    Ok(ReplyCode::new(code))
}
