//! Low-level SMTP stream handling.

use std::io;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::error::{Error, Result};

/// Bounded timeout for establishing the connection.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Deadline for each server reply line.
pub const REPLY_TIMEOUT: Duration = Duration::from_secs(60);

/// Plain-TCP SMTP stream.
///
/// Closing is handled by ownership: dropping the stream (directly or
/// via the session that owns it) releases the socket on every exit
/// path, success or failure.
#[derive(Debug)]
pub struct SmtpStream(BufReader<TcpStream>);

impl SmtpStream {
    /// Reads one reply line, with trailing CRLF stripped.
    ///
    /// # Errors
    ///
    /// Returns a [`Error::Connection`] if the read fails, the server
    /// closes the connection, or [`REPLY_TIMEOUT`] elapses.
    pub async fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = timeout(REPLY_TIMEOUT, self.0.read_line(&mut line))
            .await
            .map_err(|_| {
                io::Error::new(io::ErrorKind::TimedOut, "timed out waiting for server reply")
            })??;

        if read == 0 {
            return Err(Error::Connection(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "server closed the connection",
            )));
        }

        Ok(line.trim_end().to_string())
    }

    /// Writes data to the stream and flushes it.
    ///
    /// # Errors
    ///
    /// Returns a [`Error::Connection`] if the write fails.
    pub async fn write_all(&mut self, data: &[u8]) -> Result<()> {
        self.0.get_mut().write_all(data).await?;
        self.0.get_mut().flush().await?;
        Ok(())
    }
}

/// Connects to an SMTP server over plain TCP.
///
/// # Errors
///
/// Returns a [`Error::Connection`] carrying the underlying OS reason if
/// the connection cannot be established within [`CONNECT_TIMEOUT`].
pub async fn connect(hostname: &str, port: u16) -> Result<SmtpStream> {
    let addr = format!("{hostname}:{port}");
    let stream = timeout(CONNECT_TIMEOUT, TcpStream::connect(&addr))
        .await
        .map_err(|_| {
            io::Error::new(
                io::ErrorKind::TimedOut,
                format!("timed out connecting to {addr}"),
            )
        })??;

    Ok(SmtpStream(BufReader::new(stream)))
}
