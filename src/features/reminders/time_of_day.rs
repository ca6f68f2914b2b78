//! Daily trigger time: a validated hour/minute pair and its strict parser.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use chrono::{DateTime, Local, Timelike};

/// A validated time of day on the 24-hour local wall clock.
///
/// Construction is the only validation point; a held value is always in
/// range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Build from raw components, rejecting out-of-range values.
    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        if hour > 23 {
            anyhow::bail!("hour out of range (0-23): {hour}");
        }
        if minute > 59 {
            anyhow::bail!("minute out of range (0-59): {minute}");
        }
        Ok(TimeOfDay { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Whether `now` falls inside this trigger's minute.
    pub fn matches(&self, now: DateTime<Local>) -> bool {
        now.hour() == u32::from(self.hour) && now.minute() == u32::from(self.minute)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = anyhow::Error;

    /// Parse `HH:MM` (24-hour). Components may drop the leading zero
    /// (`8:5` is 08:05); anything else is rejected, including extra
    /// fields, signs and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self> {
        let (hh, mm) = s
            .split_once(':')
            .ok_or_else(|| anyhow::anyhow!("expected HH:MM (24-hour), got {s:?}"))?;
        let hour = parse_component(hh, "hour")?;
        let minute = parse_component(mm, "minute")?;
        TimeOfDay::new(hour, minute)
    }
}

/// A component is 1-2 ASCII digits, nothing else. Range checking happens
/// in `TimeOfDay::new`.
fn parse_component(part: &str, what: &str) -> Result<u8> {
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        anyhow::bail!("{what} must be 1-2 digits, got {part:?}");
    }
    Ok(part.parse()?)
}
