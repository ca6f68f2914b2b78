//! Reminder scheduling command handlers
//!
//! Handles: schedule, cancel, canceljob, plus the free-text time answer
//! the dispatcher forwards while a schedule dialogue is open.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.2.0
//!
//! ## Changelog
//! - 1.1.0: Case-insensitive command keywords
//! - 1.0.0: Initial implementation

use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use crate::commands::context::CommandContext;
use crate::commands::handler::CommandHandler;
use crate::features::dialogue::DialogReply;
use crate::transport::InboundMessage;

/// Prompt sent when a schedule dialogue opens.
const TIME_PROMPT: &str =
    "Send me the time you want a daily reminder in HH:MM (24-hour) format, e.g. 18:30.";

/// Re-prompt sent for an unparseable time answer.
const INVALID_TIME: &str =
    "Time format invalid. Please send HH:MM (24-hour). Try again or /cancel.";

/// Handler for the scheduling commands
pub struct ScheduleHandler;

#[async_trait]
impl CommandHandler for ScheduleHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["schedule", "cancel", "canceljob"]
    }

    async fn handle(&self, ctx: Arc<CommandContext>, msg: &InboundMessage) -> Result<()> {
        let command = msg.text.trim().trim_start_matches('/');
        let name = command
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_lowercase();
        match name.as_str() {
            "schedule" => self.handle_schedule(&ctx, &msg.user_id).await,
            "cancel" => self.handle_cancel(&ctx, &msg.user_id).await,
            "canceljob" => self.handle_canceljob(&ctx, &msg.user_id).await,
            _ => Ok(()),
        }
    }
}

impl ScheduleHandler {
    /// Handle /schedule - open (or restart) the time dialogue
    async fn handle_schedule(&self, ctx: &CommandContext, user_id: &str) -> Result<()> {
        ctx.dialog.request_schedule(user_id);
        ctx.notifier.notify(user_id, TIME_PROMPT).await
    }

    /// Handle /cancel - abort the dialogue; any installed job stays
    ///
    /// Acknowledged even when no dialogue is open, so the command is safe
    /// to send at any point.
    async fn handle_cancel(&self, ctx: &CommandContext, user_id: &str) -> Result<()> {
        ctx.dialog.cancel(user_id);
        ctx.notifier.notify(user_id, "Scheduling cancelled.").await
    }

    /// Handle /canceljob - remove the installed reminder, if any
    async fn handle_canceljob(&self, ctx: &CommandContext, user_id: &str) -> Result<()> {
        let reply = if ctx.scheduler.unschedule(user_id) {
            "Your scheduled reminder was cancelled."
        } else {
            "You have no scheduled reminders."
        };
        ctx.notifier.notify(user_id, reply).await
    }

    /// Free-text answer while the dialogue is open. Called by the
    /// dispatcher, not through the command registry.
    pub(crate) async fn handle_time_input(
        ctx: &CommandContext,
        user_id: &str,
        text: &str,
    ) -> Result<()> {
        match ctx.dialog.receive_input(user_id, text) {
            DialogReply::Scheduled(trigger) => {
                let ack = format!(
                    "Okay — scheduled a daily reminder at {trigger}. You can /canceljob to remove it."
                );
                ctx.notifier.notify(user_id, &ack).await
            }
            DialogReply::InvalidTime(reason) => {
                debug!("Rejected time input from user {user_id}: {reason}");
                ctx.notifier.notify(user_id, INVALID_TIME).await
            }
            // The session vanished mid-flight; nothing to say
            DialogReply::NotAwaiting | DialogReply::TimePrompt => Ok(()),
        }
    }
}
