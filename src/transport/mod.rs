//! # Transport Layer
//!
//! The seam between the reminder engine and whatever chat network carries
//! its messages. The engine only sees `Notifier` (outbound) and
//! `InboundMessage` (inbound); the bundled console adapter serves local
//! runs, real chat transports are wired in at startup behind the same two
//! types.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod console;

use anyhow::Result;
use async_trait::async_trait;

use crate::core::UserId;

/// Outbound delivery callback.
///
/// The scheduler fires reminders and the command layer sends prompts and
/// acknowledgements through this one seam. A returned error means the
/// message did not go out; callers decide whether that matters.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver `text` to `user`.
    async fn notify(&self, user: &str, text: &str) -> Result<()>;
}

/// One inbound chat event: who said what.
#[derive(Debug, Clone)]
pub struct InboundMessage {
    pub user_id: UserId,
    pub text: String,
}
