//! Shared identity types.

/// Opaque identity of the person a reminder belongs to.
///
/// Transports mint these (a Telegram chat id, a console name); the engine
/// only ever compares and logs them.
pub type UserId = String;
