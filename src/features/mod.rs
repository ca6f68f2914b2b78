//! # Features Layer
//!
//! Feature modules of the reminder bot: the scheduling engine plus the
//! conversation and tips surfaces built on top of it.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod dialogue;
pub mod reminders;
pub mod tips;

pub use dialogue::{DialogReply, ScheduleDialog, Session};
pub use reminders::{JobRegistry, ReminderJob, ReminderScheduler, TimeOfDay, REMINDER_TEXT};
pub use tips::TipLibrary;
