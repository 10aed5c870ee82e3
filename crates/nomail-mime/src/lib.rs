//! # nomail-mime
//!
//! Composition of the message block a mail sender writes after DATA:
//! the fixed header set (`From`, `To`, `Date`, `Subject`,
//! `MIME-Version`, `Content-Type`), the blank separator, the raw body,
//! and the terminating `.` line. Subjects with non-ASCII text are
//! carried as RFC 2047 encoded words.
//!
//! ## Quick Start
//!
//! ```
//! use nomail_mime::Mail;
//!
//! let mail = Mail::new("a@x.com", "b@y.com", "Hi", "<p>Hello</p>");
//! let block = mail.to_wire();
//! assert!(block.ends_with("\r\n.\r\n"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod error;
mod message;

pub mod encoding;

pub use error::{Error, Result};
pub use message::Mail;
