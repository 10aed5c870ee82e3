//! Error types for the sender facade.

/// Result type alias for sender operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to callers of [`crate::Mailer`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The SMTP transaction failed (connection, protocol, or envelope
    /// validation).
    #[error(transparent)]
    Smtp(#[from] nomail_smtp::Error),

    /// Configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),
}
