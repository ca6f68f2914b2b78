// Core layer - shared types and configuration
pub mod core;

// Features layer - all feature modules
pub mod features;

// Application layer
pub mod commands;

// Transport layer - delivery seam and the console adapter
pub mod transport;

// Re-export core items
pub use core::{Config, UserId};

// Re-export feature items
pub use features::{
    // Dialogue
    DialogReply, ScheduleDialog, Session,
    // Reminders
    JobRegistry, ReminderJob, ReminderScheduler, TimeOfDay, REMINDER_TEXT,
    // Tips
    TipLibrary,
};

// Re-export command infrastructure
pub use commands::{CommandContext, CommandRegistry, MessageDispatcher};

// Re-export transport seam
pub use transport::{InboundMessage, Notifier};
