//! # Core Module
//!
//! Configuration and shared domain types for the reminder bot.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod config;
pub mod types;

// Re-export commonly used items
pub use config::Config;
pub use types::UserId;
