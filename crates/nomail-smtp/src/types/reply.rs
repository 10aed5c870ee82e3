//! SMTP reply codes and their RFC reason phrases.

/// SMTP reply code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReplyCode(u16);

impl ReplyCode {
    /// Creates a new reply code.
    #[must_use]
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Returns the numeric code.
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    /// Returns the RFC reason phrase for a documented code.
    ///
    /// The table is pure data covering the reply codes of RFC 5321 and
    /// the SMTP AUTH extension; it takes no part in control flow beyond
    /// producing error text. Undocumented codes return `None`.
    #[must_use]
    pub const fn reason_phrase(self) -> Option<&'static str> {
        match self.0 {
            211 => Some("System status, or system help reply"),
            214 => Some("Help message (A response to the HELP command)"),
            220 => Some("<domain> Service ready"),
            221 => Some("<domain> Service closing transmission channel"),
            235 => Some("Authentication succeeded"),
            250 => Some("Requested mail action okay, completed"),
            251 => Some("User not local; will forward"),
            252 => Some("Cannot verify the user, but it will try to deliver the message anyway"),
            334 => Some("(Server challenge - the text part contains the Base64-encoded challenge)"),
            354 => Some("Start mail input"),
            421 => Some("Service not available, closing transmission channel (This may be a reply to any command if the service knows it must shut down)"),
            432 => Some("A password transition is needed"),
            450 => Some("Requested mail action not taken: mailbox unavailable (e.g., mailbox busy or temporarily blocked for policy reasons)"),
            451 => Some("Requested action aborted: local error in processing / IMAP server unavailable"),
            452 => Some("Requested action not taken: insufficient system storage"),
            454 => Some("Temporary authentication failure"),
            455 => Some("Server unable to accommodate parameters"),
            500 => Some("Syntax error, command unrecognized (This may include errors such as command line too long) / Authentication Exchange line is too long"),
            501 => Some("Syntax error in parameters or arguments / Cannot Base64-decode Client responses / Client initiated Authentication Exchange (only when the SASL mechanism specified that client does not begin the authentication exchange)"),
            502 => Some("Command not implemented"),
            503 => Some("Bad sequence of commands"),
            504 => Some("Command parameter is not implemented / Unrecognized authentication type"),
            521 => Some("Server does not accept mail"),
            523 => Some("Encryption Needed"),
            530 => Some("Authentication required"),
            534 => Some("Authentication mechanism is too weak"),
            535 => Some("Authentication credentials invalid"),
            538 => Some("Encryption required for requested authentication mechanism"),
            550 => Some("Requested action not taken: mailbox unavailable (e.g., mailbox not found, no access, or command rejected for policy reasons)"),
            551 => Some("User not local; please try <forward-path>"),
            552 => Some("Requested mail action aborted: exceeded storage allocation"),
            553 => Some("Requested action not taken: mailbox name not allowed"),
            554 => Some("Transaction has failed (Or, in the case of a connection-opening response, \"No SMTP service here\") / Message too big for system"),
            556 => Some("Domain does not accept mail"),
            _ => None,
        }
    }
}

impl std::fmt::Display for ReplyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Codes the fixed send sequence expects.
impl ReplyCode {
    /// 220 Service ready
    pub const SERVICE_READY: Self = Self(220);
    /// 221 Service closing transmission channel
    pub const CLOSING: Self = Self(221);
    /// 250 Requested mail action okay, completed
    pub const OK: Self = Self(250);
    /// 354 Start mail input
    pub const START_DATA: Self = Self(354);
}
