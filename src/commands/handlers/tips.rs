//! Content tip command handler
//!
//! Handles: tips
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.3.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation

use anyhow::Result;
use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::commands::context::CommandContext;
use crate::commands::handler::CommandHandler;
use crate::transport::InboundMessage;

/// Handler for the /tips command
pub struct TipsHandler;

#[async_trait]
impl CommandHandler for TipsHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["tips"]
    }

    async fn handle(&self, ctx: Arc<CommandContext>, msg: &InboundMessage) -> Result<()> {
        let idea = ctx.tips.pick();
        info!("Sending content tip to user {}", msg.user_id);
        ctx.notifier
            .notify(&msg.user_id, &format!("Content idea: {idea}"))
            .await
    }
}
