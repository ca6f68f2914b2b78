//! # Command System
//!
//! Keyword (/) command handling for inbound chat messages.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.2.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Initial implementation (handler trait, context, registry, dispatcher)

pub mod context;
pub mod dispatcher;
pub mod handler;
pub mod handlers;
pub mod registry;

// Re-export handler infrastructure
pub use context::CommandContext;
pub use dispatcher::MessageDispatcher;
pub use handler::CommandHandler;
pub use handlers::create_all_handlers;
pub use registry::CommandRegistry;
