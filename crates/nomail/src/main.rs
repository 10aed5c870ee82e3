//! Command-line sender: one message per invocation.
//!
//! The SMTP endpoint comes from the environment (`PROJECT_BASE_URL`,
//! `SMTP_ADDRESS`, `SMTP_PORT`); the envelope comes from the arguments.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

use std::process::ExitCode;

use nomail::Mailer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nomail=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [from, to, subject, message] = args.as_slice() else {
        eprintln!("usage: nomail <from> <to> <subject> <message>");
        return ExitCode::from(2);
    };

    let mailer = match Mailer::from_env() {
        Ok(mailer) => mailer,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    };

    match mailer.send(from, to, subject, message).await {
        Ok(()) => {
            println!("Email successfully sent!");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
