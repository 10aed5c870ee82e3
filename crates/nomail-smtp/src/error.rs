//! Error types for SMTP operations.

use std::io;

/// Result type alias for SMTP operations.
pub type Result<T> = std::result::Result<T, Error>;

/// SMTP error types.
///
/// Every failed send is one of three kinds: the transport broke, the
/// server said something unexpected, or the caller supplied a malformed
/// address. A failure at any step abandons the session; no cleanup
/// command is sent.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Transport-level failure (connect, read, or write).
    #[error("Connection error: {0}")]
    Connection(#[from] io::Error),

    /// Reply line without a numeric code, or a code other than the one
    /// expected for the current step.
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// Envelope address failed syntactic validation.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl Error {
    /// Creates a protocol error.
    #[must_use]
    pub fn protocol(detail: impl Into<String>) -> Self {
        Self::Protocol(detail.into())
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation(detail.into())
    }
}
