//! Inbound message classification
//!
//! Splits each inbound chat message into one of four routes: a known
//! `/command`, a time answer for an open schedule dialogue, an unknown
//! command, or idle chatter that is ignored.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.2.0
//!
//! ## Changelog
//! - 1.1.0: Case-insensitive command keywords
//! - 1.0.0: Initial implementation

use anyhow::Result;
use log::{debug, info};
use std::sync::Arc;
use uuid::Uuid;

use super::context::CommandContext;
use super::handlers::schedule::ScheduleHandler;
use super::registry::CommandRegistry;
use crate::transport::InboundMessage;

/// Reply for unrecognized commands.
const UNKNOWN_COMMAND_REPLY: &str = "Sorry, I didn't understand that. Use /tips or /schedule.";

/// Routes inbound messages to command handlers and the schedule dialogue.
///
/// Cheap to clone; every concurrent message gets its own copy.
#[derive(Clone)]
pub struct MessageDispatcher {
    registry: CommandRegistry,
    ctx: Arc<CommandContext>,
}

impl MessageDispatcher {
    pub fn new(registry: CommandRegistry, ctx: Arc<CommandContext>) -> Self {
        Self { registry, ctx }
    }

    /// Route one inbound message.
    ///
    /// Commands win over an open dialogue, so `/cancel` still works while
    /// the bot is waiting for a time answer. Keywords match
    /// case-insensitively.
    pub async fn dispatch(&self, msg: &InboundMessage) -> Result<()> {
        let request_id = Uuid::new_v4();
        let text = msg.text.trim();
        debug!(
            "[{}] 📨 Message from user {}: {}",
            request_id,
            msg.user_id,
            text.chars().take(100).collect::<String>()
        );

        if let Some(command) = text.strip_prefix('/') {
            let name = command
                .split_whitespace()
                .next()
                .unwrap_or_default()
                .to_lowercase();
            if let Some(handler) = self.registry.get(&name) {
                info!("[{request_id}] 🎯 Processing /{name} for user {}", msg.user_id);
                return handler.handle(Arc::clone(&self.ctx), msg).await;
            }
            debug!("[{request_id}] Unknown command /{name} from user {}", msg.user_id);
            return self
                .ctx
                .notifier
                .notify(&msg.user_id, UNKNOWN_COMMAND_REPLY)
                .await;
        }

        if self.ctx.dialog.is_awaiting(&msg.user_id) {
            debug!(
                "[{request_id}] Treating free text as a time answer for user {}",
                msg.user_id
            );
            return ScheduleHandler::handle_time_input(&self.ctx, &msg.user_id, text).await;
        }

        debug!("[{request_id}] Ignoring idle chatter from user {}", msg.user_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::handlers::create_all_handlers;
    use crate::features::dialogue::ScheduleDialog;
    use crate::features::reminders::{JobRegistry, ReminderScheduler, REMINDER_TEXT};
    use crate::features::tips::TipLibrary;
    use crate::transport::testing::RecordingNotifier;
    use chrono::{DateTime, Local, TimeZone};

    struct Fixture {
        dispatcher: MessageDispatcher,
        ctx: Arc<CommandContext>,
        jobs: Arc<JobRegistry>,
        notifier: Arc<RecordingNotifier>,
    }

    fn fixture() -> Fixture {
        let jobs = Arc::new(JobRegistry::new());
        let notifier = RecordingNotifier::new();
        let scheduler = Arc::new(ReminderScheduler::new(jobs.clone(), notifier.clone()));
        let dialog = Arc::new(ScheduleDialog::new(scheduler.clone()));
        let ctx = Arc::new(CommandContext::new(
            dialog,
            scheduler,
            TipLibrary::default(),
            notifier.clone(),
        ));

        let mut registry = CommandRegistry::new();
        for handler in create_all_handlers() {
            registry.register(handler);
        }

        Fixture {
            dispatcher: MessageDispatcher::new(registry, ctx.clone()),
            ctx,
            jobs,
            notifier,
        }
    }

    fn msg(user: &str, text: &str) -> InboundMessage {
        InboundMessage {
            user_id: user.to_string(),
            text: text.to_string(),
        }
    }

    fn at(h: u32, m: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, 14, h, m, 0).unwrap()
    }

    async fn send(f: &Fixture, user: &str, text: &str) {
        f.dispatcher.dispatch(&msg(user, text)).await.unwrap();
    }

    #[tokio::test]
    async fn test_schedule_flow_installs_and_fires() {
        let f = fixture();

        send(&f, "alice", "/schedule").await;
        assert!(f.notifier.texts_for("alice").last().unwrap().contains("HH:MM"));

        send(&f, "alice", "09:15").await;
        let ack = f.notifier.texts_for("alice").last().unwrap().clone();
        assert!(ack.contains("daily reminder at 09:15"), "unexpected ack: {ack}");
        assert_eq!(f.jobs.lookup("alice").unwrap().trigger.to_string(), "09:15");

        f.ctx.scheduler.evaluate_at(at(9, 14)).await;
        f.ctx.scheduler.evaluate_at(at(9, 15)).await;
        f.ctx.scheduler.evaluate_at(at(9, 16)).await;
        let reminders: Vec<_> = f
            .notifier
            .texts_for("alice")
            .into_iter()
            .filter(|t| t == REMINDER_TEXT)
            .collect();
        assert_eq!(reminders.len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_time_reprompts_once_and_keeps_session() {
        let f = fixture();

        send(&f, "alice", "/schedule").await;
        send(&f, "alice", "late evening").await;

        let replies = f.notifier.texts_for("alice");
        assert_eq!(replies.len(), 2, "prompt plus exactly one re-prompt");
        assert!(replies[1].contains("Time format invalid"));
        assert!(f.jobs.lookup("alice").is_none());

        // Retry without a fresh /schedule succeeds
        send(&f, "alice", "18:30").await;
        assert_eq!(f.jobs.lookup("alice").unwrap().trigger.to_string(), "18:30");
    }

    #[tokio::test]
    async fn test_reschedule_replaces_the_old_trigger() {
        let f = fixture();

        send(&f, "alice", "/schedule").await;
        send(&f, "alice", "09:15").await;
        f.ctx.scheduler.evaluate_at(at(9, 15)).await;

        send(&f, "alice", "/schedule").await;
        send(&f, "alice", "21:00").await;
        assert_eq!(f.jobs.lookup("alice").unwrap().trigger.to_string(), "21:00");
        assert_eq!(f.jobs.len(), 1);

        // Old trigger is gone, new one fires
        let next_day = Local.with_ymd_and_hms(2024, 5, 15, 9, 15, 0).unwrap();
        f.ctx.scheduler.evaluate_at(next_day).await;
        let new_trigger = Local.with_ymd_and_hms(2024, 5, 15, 21, 0, 0).unwrap();
        f.ctx.scheduler.evaluate_at(new_trigger).await;

        let reminders: Vec<_> = f
            .notifier
            .texts_for("alice")
            .into_iter()
            .filter(|t| t == REMINDER_TEXT)
            .collect();
        assert_eq!(reminders.len(), 2);
    }

    #[tokio::test]
    async fn test_cancel_aborts_dialogue_but_keeps_job() {
        let f = fixture();

        send(&f, "alice", "/schedule").await;
        send(&f, "alice", "09:15").await;

        send(&f, "alice", "/schedule").await;
        send(&f, "alice", "/cancel").await;
        assert_eq!(
            f.notifier.texts_for("alice").last().unwrap(),
            "Scheduling cancelled."
        );
        assert!(!f.ctx.dialog.is_awaiting("alice"));
        assert!(f.jobs.lookup("alice").is_some(), "installed job must survive /cancel");

        // Free text afterwards is idle chatter, not a time answer
        let before = f.notifier.texts_for("alice").len();
        send(&f, "alice", "10:00").await;
        assert_eq!(f.notifier.texts_for("alice").len(), before);
        assert_eq!(f.jobs.lookup("alice").unwrap().trigger.to_string(), "09:15");
    }

    #[tokio::test]
    async fn test_cancel_when_idle_still_acknowledges() {
        let f = fixture();
        send(&f, "alice", "/cancel").await;
        assert_eq!(
            f.notifier.texts_for("alice"),
            vec!["Scheduling cancelled.".to_string()]
        );
    }

    #[tokio::test]
    async fn test_canceljob_removes_job_or_reports_none() {
        let f = fixture();

        send(&f, "alice", "/canceljob").await;
        assert_eq!(
            f.notifier.texts_for("alice").last().unwrap(),
            "You have no scheduled reminders."
        );

        send(&f, "alice", "/schedule").await;
        send(&f, "alice", "09:15").await;
        send(&f, "alice", "/canceljob").await;
        assert_eq!(
            f.notifier.texts_for("alice").last().unwrap(),
            "Your scheduled reminder was cancelled."
        );
        assert!(f.jobs.lookup("alice").is_none());
    }

    #[tokio::test]
    async fn test_unknown_command_gets_fallback_reply() {
        let f = fixture();
        send(&f, "alice", "/frobnicate").await;
        assert_eq!(
            f.notifier.texts_for("alice"),
            vec![UNKNOWN_COMMAND_REPLY.to_string()]
        );
    }

    #[tokio::test]
    async fn test_idle_chatter_is_ignored() {
        let f = fixture();
        send(&f, "alice", "hello there").await;
        assert!(f.notifier.sent().is_empty());
    }

    #[tokio::test]
    async fn test_tips_returns_an_idea_from_the_library() {
        let f = fixture();
        send(&f, "alice", "/tips").await;

        let reply = f.notifier.texts_for("alice").pop().unwrap();
        let idea = reply.strip_prefix("Content idea: ").expect("tip prefix");
        assert!(f.ctx.tips.tips.iter().any(|t| t == idea));
    }

    #[tokio::test]
    async fn test_start_sends_the_greeting() {
        let f = fixture();
        send(&f, "alice", "/start").await;
        let reply = f.notifier.texts_for("alice").pop().unwrap();
        assert!(reply.contains("GrowthHelperBot"));
        assert!(reply.contains("/schedule"));
    }

    #[tokio::test]
    async fn test_dialogues_are_isolated_per_user() {
        let f = fixture();

        send(&f, "alice", "/schedule").await;
        send(&f, "bob", "09:15").await;
        assert!(f.jobs.lookup("bob").is_none(), "bob never opened a dialogue");
        assert!(f.notifier.texts_for("bob").is_empty());

        send(&f, "alice", "09:15").await;
        assert!(f.jobs.lookup("alice").is_some());
        assert!(f.jobs.lookup("bob").is_none());
    }

    #[tokio::test]
    async fn test_commands_win_over_open_dialogue() {
        let f = fixture();

        send(&f, "alice", "/schedule").await;
        send(&f, "alice", "/tips").await;

        let replies = f.notifier.texts_for("alice");
        assert!(replies.last().unwrap().starts_with("Content idea: "));
        // The dialogue stays open across the interleaved command
        assert!(f.ctx.dialog.is_awaiting("alice"));
    }

    #[tokio::test]
    async fn test_command_keywords_are_case_insensitive() {
        let f = fixture();

        send(&f, "alice", "/Schedule").await;
        assert!(f.notifier.texts_for("alice").last().unwrap().contains("HH:MM"));

        send(&f, "alice", "09:15").await;
        assert!(f.jobs.lookup("alice").is_some());

        send(&f, "alice", "/CANCELJOB").await;
        assert_eq!(
            f.notifier.texts_for("alice").last().unwrap(),
            "Your scheduled reminder was cancelled."
        );
        assert!(f.jobs.lookup("alice").is_none());
    }
}
