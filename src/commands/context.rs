//! Shared context for command handlers
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.2.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation with core shared state

use std::sync::Arc;

use crate::features::dialogue::ScheduleDialog;
use crate::features::reminders::ReminderScheduler;
use crate::features::tips::TipLibrary;
use crate::transport::Notifier;

/// Shared context for all command handlers
///
/// Contains the core services needed by the command handlers:
/// - ScheduleDialog for the time-input conversation
/// - ReminderScheduler for installing and removing jobs
/// - TipLibrary for content ideas
/// - Notifier for outbound replies
#[derive(Clone)]
pub struct CommandContext {
    pub dialog: Arc<ScheduleDialog>,
    pub scheduler: Arc<ReminderScheduler>,
    pub tips: Arc<TipLibrary>,
    pub notifier: Arc<dyn Notifier>,
}

impl CommandContext {
    /// Create a new CommandContext with the given services
    pub fn new(
        dialog: Arc<ScheduleDialog>,
        scheduler: Arc<ReminderScheduler>,
        tips: TipLibrary,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            dialog,
            scheduler,
            tips: Arc::new(tips),
            notifier,
        }
    }
}
