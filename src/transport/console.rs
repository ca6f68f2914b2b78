//! # Console Transport
//!
//! Line-oriented stdin/stdout adapter for local runs. Each input line is
//! `<user-id> <text>`; outbound messages print as `@user text`.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.4.0

use anyhow::Result;
use async_trait::async_trait;
use log::{debug, warn};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use super::{InboundMessage, Notifier};

/// Buffered inbound messages before the dispatcher picks them up.
const INBOUND_CHANNEL_CAPACITY: usize = 64;

/// Prints outbound messages to stdout.
pub struct ConsoleNotifier;

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn notify(&self, user: &str, text: &str) -> Result<()> {
        println!("@{user} {text}");
        Ok(())
    }
}

/// Parse one console line into an inbound message.
///
/// The first whitespace separates the user id from the text; surrounding
/// whitespace is dropped, inner spacing of the text survives.
fn parse_line(line: &str) -> Option<InboundMessage> {
    let line = line.trim();
    let (user_id, rest) = line.split_once(char::is_whitespace)?;
    let text = rest.trim();
    if text.is_empty() {
        return None;
    }
    Some(InboundMessage {
        user_id: user_id.to_string(),
        text: text.to_string(),
    })
}

/// Spawn the stdin reader task.
///
/// The receiver yields one message per well-formed line and closes on EOF.
pub fn spawn_stdin_reader() -> mpsc::Receiver<InboundMessage> {
    let (tx, rx) = mpsc::channel(INBOUND_CHANNEL_CAPACITY);

    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    match parse_line(&line) {
                        Some(msg) => {
                            if tx.send(msg).await.is_err() {
                                break;
                            }
                        }
                        None => {
                            warn!("Ignoring malformed console line {line:?} (expected `<user-id> <text>`)");
                        }
                    }
                }
                Ok(None) => {
                    debug!("Console input closed");
                    break;
                }
                Err(e) => {
                    warn!("Failed to read console input: {e}");
                    break;
                }
            }
        }
    });

    rx
}
