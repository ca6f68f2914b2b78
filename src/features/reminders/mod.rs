//! # Feature: Daily Reminders
//!
//! Per-user recurring reminder engine. A one-job-per-user registry holds
//! validated time-of-day triggers; the background clock loop fires due
//! jobs through the transport seam.
//!
//! - **Version**: 1.2.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.2.0: Triggers installed inside their own minute first fire the next day
//! - 1.1.0: Replacement with an unchanged trigger keeps the fired-today guard
//! - 1.0.0: Initial release with registry, clock loop and HH:MM parser

pub mod registry;
pub mod scheduler;
pub mod time_of_day;

pub use registry::{JobRegistry, ReminderJob};
pub use scheduler::{ReminderScheduler, REMINDER_TEXT};
pub use time_of_day::TimeOfDay;
