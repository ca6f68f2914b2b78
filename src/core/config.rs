//! # Configuration
//!
//! Environment-driven runtime settings. Loading the `.env` file happens in
//! the binary before this module is consulted.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::{Context, Result};

/// Clock cadence used when `REMINDER_TICK_SECONDS` is unset.
const DEFAULT_TICK_SECONDS: u64 = 30;

/// Runtime configuration for the bot.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log filter handed to env_logger (`LOG_LEVEL`, default `info`).
    pub log_level: String,
    /// Clock loop cadence in seconds (`REMINDER_TICK_SECONDS`, default 30).
    /// The scheduler clamps anything coarser than one minute.
    pub tick_seconds: u64,
    /// Path of the optional tip list (`TIPS_CONFIG_PATH`, default `tips.yaml`).
    pub tips_path: String,
}

impl Config {
    /// Read configuration from the environment.
    pub fn from_env() -> Result<Self> {
        Ok(Config {
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            tick_seconds: parse_tick(std::env::var("REMINDER_TICK_SECONDS").ok().as_deref())?,
            tips_path: std::env::var("TIPS_CONFIG_PATH").unwrap_or_else(|_| "tips.yaml".to_string()),
        })
    }
}

/// Parse the tick override; absent means the default cadence.
fn parse_tick(raw: Option<&str>) -> Result<u64> {
    match raw {
        None => Ok(DEFAULT_TICK_SECONDS),
        Some(s) => s
            .trim()
            .parse()
            .with_context(|| format!("REMINDER_TICK_SECONDS must be a number of seconds, got {s:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_defaults_when_unset() {
        assert_eq!(parse_tick(None).unwrap(), DEFAULT_TICK_SECONDS);
    }

    #[test]
    fn test_tick_parses_override() {
        assert_eq!(parse_tick(Some("20")).unwrap(), 20);
        assert_eq!(parse_tick(Some(" 45 ")).unwrap(), 45);
    }

    #[test]
    fn test_tick_rejects_garbage() {
        assert!(parse_tick(Some("abc")).is_err());
        assert!(parse_tick(Some("-5")).is_err());
        assert!(parse_tick(Some("")).is_err());
    }
}
