//! End-to-end tests for [`nomail::Mailer::send`] against a scripted
//! in-process SMTP server.

#![allow(clippy::unwrap_used)]

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use nomail::{Error, Mailer};

const HAPPY_PATH: &[&str] = &[
    "220 smtp.example.com ESMTP ready\r\n",
    "250 smtp.example.com\r\n",
    "250 OK\r\n",
    "250 OK\r\n",
    "354 Start mail input\r\n",
    "250 OK, queued\r\n",
    "221 Bye\r\n",
];

/// Binds a listener and plays the reply script against `sessions`
/// consecutive connections, recording every line each client sends.
///
/// The first reply is the greeting; each later reply goes out after one
/// command line. A `354` reply switches to data mode, consuming lines
/// through the terminating `.` line.
fn script_server(
    replies: &'static [&'static str],
    sessions: usize,
) -> (std::net::SocketAddr, JoinHandle<Vec<Vec<String>>>) {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.set_nonblocking(true).unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let listener = TcpListener::from_std(listener).unwrap();
        let mut transcripts = Vec::new();

        for _ in 0..sessions {
            let (stream, _) = listener.accept().await.unwrap();
            let mut reader = BufReader::new(stream);
            let mut received = Vec::new();

            let mut replies = replies.iter();
            if let Some(greeting) = replies.next() {
                reader.get_mut().write_all(greeting.as_bytes()).await.unwrap();
            }

            let mut in_data = false;
            'script: for reply in replies {
                if in_data {
                    loop {
                        let mut line = String::new();
                        if reader.read_line(&mut line).await.unwrap() == 0 {
                            break 'script;
                        }
                        let terminator = line == ".\r\n";
                        received.push(line);
                        if terminator {
                            break;
                        }
                    }
                } else {
                    let mut line = String::new();
                    if reader.read_line(&mut line).await.unwrap() == 0 {
                        break 'script;
                    }
                    received.push(line);
                }

                reader.get_mut().write_all(reply.as_bytes()).await.unwrap();
                in_data = reply.starts_with("354");
            }

            // Anything after the script ran out, until the client
            // hangs up.
            loop {
                let mut line = String::new();
                if reader.read_line(&mut line).await.unwrap() == 0 {
                    break;
                }
                received.push(line);
            }

            transcripts.push(received);
        }

        transcripts
    });

    (addr, handle)
}

fn mailer_for(addr: std::net::SocketAddr) -> Mailer {
    Mailer::new("host.example", addr.ip().to_string(), addr.port())
}

#[tokio::test]
async fn send_walks_the_full_sequence() {
    let (addr, server) = script_server(HAPPY_PATH, 1);

    mailer_for(addr)
        .send("a@x.com", "b@y.com", "Hi", "Hello")
        .await
        .unwrap();

    let transcript = &server.await.unwrap()[0];

    // Commands and message lines, in wire order.
    let expected_order = [
        "HELO host.example\r\n",
        "MAIL FROM:<a@x.com>\r\n",
        "RCPT TO:<b@y.com>\r\n",
        "DATA\r\n",
        "From: <a@x.com>\r\n",
        "To: <b@y.com>\r\n",
        "Date: ",
        "Subject: Hi\r\n",
        "MIME-Version: 1.0\r\n",
        "Content-Type: text/html; charset=UTF-8\r\n",
        "\r\n",
        "Hello\r\n",
        ".\r\n",
        "QUIT\r\n",
    ];

    let mut cursor = 0;
    for needle in expected_order {
        let found = transcript[cursor..]
            .iter()
            .position(|line| line.starts_with(needle))
            .unwrap_or_else(|| panic!("missing {needle:?} in {transcript:?}"));
        cursor += found + 1;
    }
}

#[tokio::test]
async fn unexpected_reply_stops_the_sequence() {
    // MAIL FROM draws a transient failure; nothing after it goes out.
    let (addr, server) = script_server(
        &[
            "220 ready\r\n",
            "250 hello\r\n",
            "451 try again later\r\n",
        ],
        1,
    );

    let err = mailer_for(addr)
        .send("a@x.com", "b@y.com", "Hi", "Hello")
        .await
        .unwrap_err();
    match err {
        Error::Smtp(nomail_smtp::Error::Protocol(detail)) => {
            assert!(detail.starts_with("Requested action aborted"));
        }
        other => panic!("expected protocol error, got {other:?}"),
    }

    let transcript = &server.await.unwrap()[0];
    assert_eq!(transcript.last().unwrap(), "MAIL FROM:<a@x.com>\r\n");
    assert!(!transcript.iter().any(|line| line == "RCPT TO:<b@y.com>\r\n"));
}

#[tokio::test]
async fn data_step_requires_354_even_for_success_codes() {
    // 250 is a success code, but the DATA step accepts 354 only. The
    // error carries the reason phrase of the code actually received.
    let (addr, server) = script_server(
        &[
            "220 ready\r\n",
            "250 hello\r\n",
            "250 OK\r\n",
            "250 OK\r\n",
            "250 go ahead\r\n",
        ],
        1,
    );

    let err = mailer_for(addr)
        .send("a@x.com", "b@y.com", "Hi", "Hello")
        .await
        .unwrap_err();
    match err {
        Error::Smtp(nomail_smtp::Error::Protocol(detail)) => {
            assert_eq!(detail, "Requested mail action okay, completed");
        }
        other => panic!("expected protocol error, got {other:?}"),
    }

    let transcript = &server.await.unwrap()[0];
    assert_eq!(transcript.last().unwrap(), "DATA\r\n");
}

#[tokio::test]
async fn failed_quit_fails_the_send() {
    // No partial success: the message was accepted, but the call still
    // reports failure when QUIT draws the wrong code.
    let (addr, _server) = script_server(
        &[
            "220 ready\r\n",
            "250 hello\r\n",
            "250 OK\r\n",
            "250 OK\r\n",
            "354 Start mail input\r\n",
            "250 OK, queued\r\n",
            "421 shutting down\r\n",
        ],
        1,
    );

    let err = mailer_for(addr)
        .send("a@x.com", "b@y.com", "Hi", "Hello")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Smtp(nomail_smtp::Error::Protocol(_))
    ));
}

#[tokio::test]
async fn helo_precedes_sender_validation() {
    // Connect and HELO happen before the from address is checked; the
    // bad address then fails without further network I/O.
    let (addr, server) = script_server(&["220 ready\r\n", "250 hello\r\n"], 1);

    let err = mailer_for(addr)
        .send("not-an-email", "b@example.com", "s", "m")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Smtp(nomail_smtp::Error::Validation(_))
    ));

    let transcript = &server.await.unwrap()[0];
    assert_eq!(transcript, &vec!["HELO host.example\r\n".to_string()]);
}

#[tokio::test]
async fn repeated_sends_open_independent_connections() {
    let (addr, server) = script_server(HAPPY_PATH, 2);
    let mailer = mailer_for(addr);

    mailer.send("a@x.com", "b@y.com", "Hi", "Hello").await.unwrap();
    mailer.send("a@x.com", "b@y.com", "Hi", "Hello").await.unwrap();

    // Two identical calls, two full transactions, nothing cached.
    let transcripts = server.await.unwrap();
    assert_eq!(transcripts.len(), 2);
    assert_eq!(transcripts[0], transcripts[1]);
    assert_eq!(transcripts[0].first().unwrap(), "HELO host.example\r\n");
}

#[tokio::test]
async fn non_ascii_subject_goes_out_encoded() {
    let (addr, server) = script_server(HAPPY_PATH, 1);

    mailer_for(addr)
        .send("a@x.com", "b@y.com", "Привіт світ", "Hello")
        .await
        .unwrap();

    let transcript = &server.await.unwrap()[0];
    let subject = transcript
        .iter()
        .find(|line| line.starts_with("Subject: "))
        .unwrap();
    assert!(subject.starts_with("Subject: =?UTF-8?B?"));
}
