//! # studyroom-console
//!
//! Terminal front-end for a single study-room chat session.
//!
//! This binary provides:
//! - **One in-memory session engine** with moderation, bans, presence and
//!   study groups
//! - **Line commands** on stdin (`/help` lists them); plain lines are chat
//!   messages
//! - **Notices** for every state change, printed after each command
//!
//! Nothing is persisted and nothing is networked. The admin password is a
//! shared secret for a trusted local operator, not an access control.

mod command;
mod config;
mod error;
mod render;
mod repl;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use studyroom_session::SessionEngine;
use studyroom_shared::constants::APP_NAME;

use crate::command::Command;
use crate::config::ConsoleConfig;
use crate::repl::Reply;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // -----------------------------------------------------------------------
    // 1. Initialize tracing (respects RUST_LOG env var)
    // -----------------------------------------------------------------------
    // Logs go to stderr so they never interleave with chat output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,studyroom_session=debug")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting {} console v{}", APP_NAME, env!("CARGO_PKG_VERSION"));

    // -----------------------------------------------------------------------
    // 2. Load configuration
    // -----------------------------------------------------------------------
    let config = ConsoleConfig::from_env();
    info!(?config, "Loaded configuration");
    if config.engine.uses_dev_secret() {
        warn!("STUDYROOM_ADMIN_SECRET not set, using the development admin secret");
    }

    // -----------------------------------------------------------------------
    // 3. Build the session engine
    // -----------------------------------------------------------------------
    let prompt = config.prompt.clone();
    let mut engine = SessionEngine::new(config.engine)?;

    // -----------------------------------------------------------------------
    // 4. Command loop (one line at a time, until EOF, /quit or Ctrl+C)
    // -----------------------------------------------------------------------
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    stdout
        .write_all(format!("Welcome to {APP_NAME}. Type /help for commands.\n").as_bytes())
        .await?;

    loop {
        stdout.write_all(prompt.as_bytes()).await?;
        stdout.flush().await?;

        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => {
                info!("Received Ctrl+C, shutting down");
                break;
            }
        };

        let Some(line) = line else {
            info!("Input closed, shutting down");
            break;
        };

        let mut output = match Command::parse(&line) {
            Ok(None) => continue,
            Ok(Some(command)) => match repl::execute(&mut engine, command).await {
                Ok(Reply::Quit) => break,
                Ok(Reply::Lines(reply)) => reply,
                Err(e) => vec![format!("! {e}")],
            },
            Err(e) => vec![format!("! {e}")],
        };
        output.extend(repl::notices(&mut engine));

        for text in output {
            stdout.write_all(text.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
        }
    }

    stdout.flush().await?;
    Ok(())
}
