//! SMTP connection management.

mod session;
mod stream;

pub use session::Session;
pub use stream::{CONNECT_TIMEOUT, REPLY_TIMEOUT, SmtpStream, connect};
