//! Email address validation.

use crate::error::{Error, Result};

/// Syntactically validated email address for the SMTP envelope.
///
/// Validation is deliberately shallow: it catches addresses that could
/// never be delivered (or that would corrupt the command line), and
/// leaves everything else to the server.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    /// Creates a new address from a string.
    ///
    /// # Errors
    ///
    /// Returns a [`Error::Validation`] if the address is not a
    /// syntactically well-formed email address.
    pub fn new(addr: impl Into<String>) -> Result<Self> {
        let addr = addr.into();
        Self::validate(&addr)?;
        Ok(Self(addr))
    }

    /// Returns the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(addr: &str) -> Result<()> {
        if addr.is_empty() {
            return Err(Error::validation("address is empty"));
        }

        if addr.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(Error::validation(format!(
                "address contains whitespace or control characters: {addr}"
            )));
        }

        let Some((local, domain)) = addr.split_once('@') else {
            return Err(Error::validation(format!("address must contain @: {addr}")));
        };

        if local.is_empty() || domain.is_empty() || domain.contains('@') {
            return Err(Error::validation(format!("malformed address: {addr}")));
        }

        // The domain must look like a hostname, not a bare label.
        if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
            return Err(Error::validation(format!(
                "address domain is not a valid hostname: {addr}"
            )));
        }

        Ok(())
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
