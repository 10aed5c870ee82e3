//! Outgoing message composition.
//!
//! Builds the block written after the DATA command: headers, a blank
//! separator line, the raw body, and the terminating `.` line.

use std::fmt::Write as _;

use chrono::{DateTime, Local};

use crate::encoding::encode_header;

/// A single-recipient outgoing message.
#[derive(Debug, Clone)]
pub struct Mail {
    /// Sender address (bare, no display name).
    pub from: String,
    /// Recipient address.
    pub to: String,
    /// Subject line, unencoded.
    pub subject: String,
    /// Raw body, sent as HTML.
    pub body: String,
}

impl Mail {
    /// Creates a new message.
    #[must_use]
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// Renders the full DATA block, stamping `Date` with the current
    /// local time.
    #[must_use]
    pub fn to_wire(&self) -> String {
        self.to_wire_at(Local::now())
    }

    /// Renders the block with a fixed timestamp.
    ///
    /// Header order is part of the wire contract: From, To, Date,
    /// Subject, MIME-Version, Content-Type.
    fn to_wire_at(&self, date: DateTime<Local>) -> String {
        let mut data = String::new();

        let _ = write!(data, "From: <{}>\r\n", self.from);
        let _ = write!(data, "To: <{}>\r\n", self.to);
        let _ = write!(data, "Date: {}\r\n", date.to_rfc2822());
        let _ = write!(data, "Subject: {}\r\n", encode_header(&self.subject));
        data.push_str("MIME-Version: 1.0\r\n");
        data.push_str("Content-Type: text/html; charset=UTF-8\r\n");

        data.push_str("\r\n");
        data.push_str(&self.body);
        data.push_str("\r\n.\r\n");

        data
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn fixed_date() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 7, 12, 30, 0).unwrap()
    }

    #[test]
    fn headers_in_wire_order() {
        let mail = Mail::new("a@x.com", "b@y.com", "Hi", "Hello");
        let wire = mail.to_wire_at(fixed_date());

        let positions: Vec<usize> = [
            "From: <a@x.com>\r\n",
            "To: <b@y.com>\r\n",
            "Date: ",
            "Subject: Hi\r\n",
            "MIME-Version: 1.0\r\n",
            "Content-Type: text/html; charset=UTF-8\r\n",
            "\r\n\r\n",
        ]
        .iter()
        .map(|needle| wire.find(needle).unwrap())
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{wire}");
    }

    #[test]
    fn body_and_terminator_follow_blank_line() {
        let mail = Mail::new("a@x.com", "b@y.com", "Hi", "Hello");
        let wire = mail.to_wire_at(fixed_date());

        let blank = wire.find("\r\n\r\n").unwrap();
        assert_eq!(&wire[blank..], "\r\n\r\nHello\r\n.\r\n");
    }

    #[test]
    fn date_header_is_rfc2822() {
        let date = fixed_date();
        let mail = Mail::new("a@x.com", "b@y.com", "Hi", "Hello");
        let wire = mail.to_wire_at(date);

        let expected = format!("Date: {}\r\n", date.to_rfc2822());
        assert!(wire.contains(&expected));
    }

    #[test]
    fn non_ascii_subject_is_encoded() {
        let mail = Mail::new("a@x.com", "b@y.com", "Привіт", "Hello");
        let wire = mail.to_wire_at(fixed_date());

        assert!(wire.contains("Subject: =?UTF-8?B?"));
        assert!(!wire.contains("Привіт"));
    }

    #[test]
    fn html_body_is_verbatim() {
        let body = "<p>Dear friend,</p>";
        let mail = Mail::new("a@x.com", "b@y.com", "Hi", body);
        let wire = mail.to_wire_at(fixed_date());

        assert!(wire.contains("\r\n\r\n<p>Dear friend,</p>\r\n.\r\n"));
    }

    #[test]
    fn current_time_stamp() {
        let mail = Mail::new("a@x.com", "b@y.com", "Hi", "Hello");
        let wire = mail.to_wire();
        assert!(wire.contains("Date: "));
    }
}
