//! Command handler trait and infrastructure
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.2.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation for modular command handling

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use super::context::CommandContext;
use crate::transport::InboundMessage;

/// Trait for chat command handlers
///
/// Each command handler implements this trait to process one or more
/// `/commands`. Handlers are registered with a CommandRegistry and
/// dispatched based on the command keyword.
///
/// # Example
///
/// ```ignore
/// pub struct PingHandler;
///
/// #[async_trait]
/// impl CommandHandler for PingHandler {
///     fn command_names(&self) -> &'static [&'static str] {
///         &["ping"]
///     }
///
///     async fn handle(&self, ctx: Arc<CommandContext>, msg: &InboundMessage) -> Result<()> {
///         ctx.notifier.notify(&msg.user_id, "pong").await
///     }
/// }
/// ```
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Command name(s) this handler processes, without the leading slash
    ///
    /// A handler can process multiple commands if they share logic.
    fn command_names(&self) -> &'static [&'static str];

    /// Handle one inbound command message
    ///
    /// # Arguments
    ///
    /// * `ctx` - Shared command context with scheduler, dialogue, tips
    /// * `msg` - The inbound message that carried the command
    async fn handle(&self, ctx: Arc<CommandContext>, msg: &InboundMessage) -> Result<()>;
}
