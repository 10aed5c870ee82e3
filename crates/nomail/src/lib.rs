//! # nomail
//!
//! Minimal outbound mail sender, no authorization, just mail.
//!
//! One call to [`Mailer::send`] opens a fresh connection and drives the
//! fixed SMTP sequence: greeting, HELO, MAIL FROM, RCPT TO, DATA, the
//! message block, QUIT. Delivery is fire and forget: a single
//! recipient, no retries, no queue, and the first unexpected server
//! reply fails the whole attempt.
//!
//! ## Quick Start
//!
//! ```ignore
//! use nomail::Mailer;
//!
//! #[tokio::main]
//! async fn main() -> nomail::Result<()> {
//!     let mailer = Mailer::new("sender.example.com", "smtp.example.com", 25);
//!     mailer
//!         .send("from@example.com", "to@example.com", "Subject", "<p>Hello!</p>")
//!         .await
//! }
//! ```
//!
//! Deployments can read the endpoint from the environment instead with
//! [`Mailer::from_env`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod config;
mod error;

pub use config::Config;
pub use error::{Error, Result};

use nomail_mime::Mail;
use nomail_smtp::Session;
use tracing::{debug, info};

/// Fire-and-forget mail sender bound to one SMTP endpoint.
///
/// Holds no connection and no state between sends; every [`send`]
/// opens, uses, and closes its own socket, so a `Mailer` can be shared
/// and sends can run concurrently.
///
/// [`send`]: Mailer::send
#[derive(Debug, Clone)]
pub struct Mailer {
    server_name: String,
    smtp_address: String,
    smtp_port: u16,
}

impl Mailer {
    /// Creates a sender for the given endpoint.
    ///
    /// `server_name` becomes the HELO identity.
    #[must_use]
    pub fn new(
        server_name: impl Into<String>,
        smtp_address: impl Into<String>,
        smtp_port: u16,
    ) -> Self {
        Self {
            server_name: server_name.into(),
            smtp_address: smtp_address.into(),
            smtp_port,
        }
    }

    /// Creates a sender from the environment (see [`Config::from_env`]).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for missing or malformed variables.
    pub fn from_env() -> Result<Self> {
        let config = Config::from_env()?;
        Ok(Self::new(
            config.server_name,
            config.smtp_address,
            config.smtp_port,
        ))
    }

    /// Sends one message over a fresh connection.
    ///
    /// The strict step order is part of the contract: the connection
    /// and HELO happen before the envelope addresses are validated, and
    /// a failure at any step abandons the connection without further
    /// commands.
    ///
    /// # Errors
    ///
    /// Returns the first [`Error`] the sequence hits; there is no
    /// partial success and no retry.
    pub async fn send(&self, from: &str, to: &str, subject: &str, message: &str) -> Result<()> {
        debug!(host = %self.smtp_address, port = self.smtp_port, "connecting");
        let mut session =
            Session::open(&self.server_name, &self.smtp_address, self.smtp_port).await?;

        debug!(server_name = %self.server_name, "greeting");
        session.helo().await?;
        session.mail_from(from).await?;
        session.rcpt_to(to).await?;
        session.data().await?;

        let mail = Mail::new(from, to, subject, message);
        session.message(mail.to_wire().as_bytes()).await?;
        session.quit().await?;

        info!(to, "message accepted for delivery");
        Ok(())
    }
}
