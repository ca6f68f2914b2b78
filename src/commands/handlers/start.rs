//! Greeting command handler
//!
//! Handles: start
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.2.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::commands::context::CommandContext;
use crate::commands::handler::CommandHandler;
use crate::transport::InboundMessage;

/// First-contact greeting with the command overview.
const GREETING: &str = "Hi! I'm GrowthHelperBot.
I can give content tips, schedule reminders, and help you post consistently.

Commands:
/tips - get content ideas
/schedule - schedule a daily reminder to post
/cancel - cancel scheduling conversation
";

/// Handler for the /start greeting
pub struct StartHandler;

#[async_trait]
impl CommandHandler for StartHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["start"]
    }

    async fn handle(&self, ctx: Arc<CommandContext>, msg: &InboundMessage) -> Result<()> {
        ctx.notifier.notify(&msg.user_id, GREETING).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_handler_commands() {
        let handler = StartHandler;
        assert_eq!(handler.command_names(), &["start"]);
    }

    #[test]
    fn test_greeting_mentions_every_advertised_command() {
        for command in ["/tips", "/schedule", "/cancel"] {
            assert!(GREETING.contains(command), "greeting is missing {command}");
        }
    }
}
