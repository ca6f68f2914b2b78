//! Per-command handler implementations
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.2.0
//!
//! ## Changelog
//! - 1.1.0: Add TipsHandler
//! - 1.0.0: Initial implementation with StartHandler and ScheduleHandler

pub mod schedule;
pub mod start;
pub mod tips;

use std::sync::Arc;

use super::handler::CommandHandler;

/// Create all registered command handlers
///
/// Returns a vector of handlers ready to be registered with CommandRegistry.
pub fn create_all_handlers() -> Vec<Arc<dyn CommandHandler>> {
    vec![
        Arc::new(start::StartHandler),
        Arc::new(schedule::ScheduleHandler),
        Arc::new(tips::TipsHandler),
    ]
}
