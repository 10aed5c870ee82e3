//! The SMTP session: a fixed linear command sequence over one socket.

use crate::command::Command;
use crate::error::{Error, Result};
use crate::parser::parse_code;
use crate::types::{Address, ReplyCode};

use super::stream::{SmtpStream, connect};

/// A short-lived session bound to one connection.
///
/// Created per delivery attempt and never reused. Each step writes one
/// command and validates exactly one reply line against the single code
/// that step expects; the first deviation fails the session and the
/// remaining steps are skipped. No RSET or QUIT is sent on failure, the
/// connection is simply dropped (which closes the socket).
#[derive(Debug)]
pub struct Session {
    stream: SmtpStream,
    server_name: String,
}

impl Session {
    /// Connects to the server and consumes the 220 greeting.
    ///
    /// `server_name` is the identity later announced in HELO,
    /// conventionally the sending application's base URL or hostname.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Connection`] if the transport cannot be
    /// established, or [`Error::Protocol`] if the greeting is missing
    /// code 220.
    pub async fn open(server_name: impl Into<String>, host: &str, port: u16) -> Result<Self> {
        let stream = connect(host, port).await?;
        let mut session = Self {
            stream,
            server_name: server_name.into(),
        };
        session.expect(ReplyCode::SERVICE_READY).await?;
        Ok(session)
    }

    /// Greets the server; expects 250.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails or the reply deviates.
    pub async fn helo(&mut self) -> Result<()> {
        let hostname = self.server_name.clone();
        self.exchange(&Command::Helo { hostname }, ReplyCode::OK)
            .await
    }

    /// Announces the sender; expects 250.
    ///
    /// The address is validated here, after HELO, with no network I/O
    /// when validation fails.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for a malformed address, or a
    /// connection/protocol error from the exchange.
    pub async fn mail_from(&mut self, from: &str) -> Result<()> {
        let from = Address::new(from)
            .map_err(|_| Error::validation("Sender email address is invalid"))?;
        self.exchange(&Command::MailFrom { from }, ReplyCode::OK)
            .await
    }

    /// Announces the single recipient; expects 250.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for a malformed address, or a
    /// connection/protocol error from the exchange.
    pub async fn rcpt_to(&mut self, to: &str) -> Result<()> {
        let to = Address::new(to)
            .map_err(|_| Error::validation("Receiver email address is invalid"))?;
        self.exchange(&Command::RcptTo { to }, ReplyCode::OK).await
    }

    /// Starts message input; expects 354.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails or the reply deviates.
    pub async fn data(&mut self) -> Result<()> {
        self.exchange(&Command::Data, ReplyCode::START_DATA).await
    }

    /// Writes the composed message block and waits for acceptance (250).
    ///
    /// The block must already carry its headers, the blank separator
    /// line, the body, and the terminating `.` line.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails or the reply deviates.
    pub async fn message(&mut self, block: &[u8]) -> Result<()> {
        self.stream.write_all(block).await?;
        self.expect(ReplyCode::OK).await
    }

    /// Ends the session cleanly; expects 221.
    ///
    /// Consumes the session either way; the socket closes when the
    /// stream drops.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails or the reply deviates.
    pub async fn quit(mut self) -> Result<()> {
        self.exchange(&Command::Quit, ReplyCode::CLOSING).await
    }

    /// Writes one command and validates its reply.
    async fn exchange(&mut self, command: &Command, expected: ReplyCode) -> Result<()> {
        self.stream.write_all(&command.serialize()).await?;
        self.expect(expected).await
    }

    /// Reads exactly one reply line and requires the expected code.
    ///
    /// On a mismatch the error carries the RFC reason phrase for the
    /// code the server actually sent, or a generic message embedding
    /// the raw line when the code is undocumented.
    async fn expect(&mut self, expected: ReplyCode) -> Result<()> {
        let line = self.stream.read_line().await?;
        tracing::trace!(reply = %line, "server reply");

        let code = parse_code(&line)?;
        if code != expected {
            let detail = code.reason_phrase().map_or_else(
                || format!("SMTP server is not ready, reason: {line}"),
                ToString::to_string,
            );
            return Err(Error::Protocol(detail));
        }

        Ok(())
    }
}
