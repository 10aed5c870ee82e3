//! Environment-backed configuration.
//!
//! The sender is configured through three environment variables:
//! `PROJECT_BASE_URL` (the HELO identity), `SMTP_ADDRESS`, and
//! `SMTP_PORT`.

use crate::error::{Error, Result};

/// Settings for a [`crate::Mailer`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Identity announced in HELO, conventionally the sending site's
    /// base URL or hostname.
    pub server_name: String,
    /// SMTP server host.
    pub smtp_address: String,
    /// SMTP server port.
    pub smtp_port: u16,
}

impl Config {
    /// Reads the configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when a variable is unset or
    /// `SMTP_PORT` is not a port number.
    pub fn from_env() -> Result<Self> {
        let server_name = require("PROJECT_BASE_URL")?;
        let smtp_address = require("SMTP_ADDRESS")?;
        let port = require("SMTP_PORT")?;
        let smtp_port = port
            .parse()
            .map_err(|_| Error::Config(format!("SMTP_PORT is not a valid port number: {port}")))?;

        Ok(Self {
            server_name,
            smtp_address,
            smtp_port,
        })
    }
}

fn require(name: &str) -> Result<String> {
    std::env::var(name).map_err(|_| Error::Config(format!("{name} is not set")))
}
