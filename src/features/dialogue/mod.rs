//! # Feature: Schedule Dialogue
//!
//! The one-question conversation that collects a reminder time. `/schedule`
//! opens a session and the next free-text message is parsed as HH:MM; a
//! valid answer hands the trigger to the scheduler. One open session per
//! user, and the newest request wins.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.2.0
//! - **Toggleable**: false

use std::sync::Arc;

use chrono::{DateTime, Local};
use dashmap::DashMap;
use log::{debug, info};

use crate::core::UserId;
use crate::features::reminders::{ReminderScheduler, TimeOfDay};

/// One in-flight time-input session.
#[derive(Debug, Clone)]
pub struct Session {
    /// When the prompt was (last) sent.
    pub opened_at: DateTime<Local>,
    /// Invalid answers received so far.
    pub invalid_attempts: u32,
}

/// Outcome of a dialogue transition. The command layer turns these into
/// chat replies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogReply {
    /// Session opened or restarted: ask for HH:MM.
    TimePrompt,
    /// Input rejected; the session stays open. Carries the parse error.
    InvalidTime(String),
    /// Input accepted and the job installed; the session is closed.
    Scheduled(TimeOfDay),
    /// Input arrived with no open session.
    NotAwaiting,
}

/// Per-user schedule-dialogue state machine.
///
/// Session presence is the awaiting-time state; absence is idle. Other
/// users' sessions are never touched by one user's transitions.
pub struct ScheduleDialog {
    sessions: DashMap<UserId, Session>,
    scheduler: Arc<ReminderScheduler>,
}

impl ScheduleDialog {
    pub fn new(scheduler: Arc<ReminderScheduler>) -> Self {
        ScheduleDialog {
            sessions: DashMap::new(),
            scheduler,
        }
    }

    /// `/schedule`: open a session, silently restarting any open one.
    pub fn request_schedule(&self, user_id: &str) -> DialogReply {
        let session = Session {
            opened_at: Local::now(),
            invalid_attempts: 0,
        };
        if self.sessions.insert(user_id.to_string(), session).is_some() {
            debug!("Restarted open schedule dialogue for user {user_id}");
        } else {
            debug!("Opened schedule dialogue for user {user_id}");
        }
        DialogReply::TimePrompt
    }

    /// Free-text input while a session is open: parse and either install
    /// the job (closing the session) or keep the session for a retry.
    pub fn receive_input(&self, user_id: &str, text: &str) -> DialogReply {
        if !self.sessions.contains_key(user_id) {
            return DialogReply::NotAwaiting;
        }
        match text.trim().parse::<TimeOfDay>() {
            Ok(trigger) => {
                self.sessions.remove(user_id);
                self.scheduler.schedule(user_id, trigger);
                info!("User {user_id} completed the schedule dialogue: daily at {trigger}");
                DialogReply::Scheduled(trigger)
            }
            Err(e) => {
                if let Some(mut session) = self.sessions.get_mut(user_id) {
                    session.invalid_attempts += 1;
                    debug!(
                        "User {user_id} sent an invalid time {text:?} (attempt {})",
                        session.invalid_attempts
                    );
                }
                DialogReply::InvalidTime(e.to_string())
            }
        }
    }

    /// `/cancel`: abort the dialogue. Returns whether one was open. An
    /// installed reminder job is never touched here.
    pub fn cancel(&self, user_id: &str) -> bool {
        let was_open = self.sessions.remove(user_id).is_some();
        if was_open {
            info!("User {user_id} cancelled the schedule dialogue");
        }
        was_open
    }

    /// Whether the user has an open session. Drives inbound routing of
    /// free text.
    pub fn is_awaiting(&self, user_id: &str) -> bool {
        self.sessions.contains_key(user_id)
    }

    /// Open session count.
    pub fn open_sessions(&self) -> usize {
        self.sessions.len()
    }
}
