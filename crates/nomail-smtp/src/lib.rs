//! # nomail-smtp
//!
//! A minimal SMTP client driving one fixed command sequence per
//! delivery: connect, HELO, MAIL FROM, RCPT TO, DATA, message block,
//! QUIT. After each step exactly one reply line is read and validated
//! against the single code that step expects.
//!
//! No authentication, no TLS, no pipelining, no retries: one message,
//! one connection, one recipient.
//!
//! ## Quick Start
//!
//! ```ignore
//! use nomail_smtp::Session;
//!
//! #[tokio::main]
//! async fn main() -> nomail_smtp::Result<()> {
//!     let mut session = Session::open("sender.example.com", "smtp.example.com", 25).await?;
//!     session.helo().await?;
//!     session.mail_from("sender@example.com").await?;
//!     session.rcpt_to("recipient@example.com").await?;
//!     session.data().await?;
//!     session.message(b"Subject: Test\r\n\r\nHello!\r\n.\r\n").await?;
//!     session.quit().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`command`]: SMTP command builders
//! - [`connection`]: Connection handling and the session sequence
//! - [`parser`]: Reply-line code extraction
//! - [`types`]: Envelope addresses and reply codes

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod command;
pub mod connection;
mod error;
pub mod parser;
pub mod types;

pub use connection::Session;
pub use error::{Error, Result};
pub use types::{Address, ReplyCode};
