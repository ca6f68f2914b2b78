//! # Reminder Scheduler
//!
//! Owns the background clock loop: wakes on a fixed cadence, claims every
//! job whose trigger minute has arrived and delivers the reminder through
//! the transport seam.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.1.0: Next-day first fire for triggers inside the current minute; shutdown wins over a pending tick
//! - 1.0.0: Initial release

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local};
use log::{debug, error, info, warn};
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

use super::{JobRegistry, ReminderJob, TimeOfDay};
use crate::transport::Notifier;

/// Fixed payload delivered at fire time.
pub const REMINDER_TEXT: &str =
    "⏰ Reminder: time to create/post something! Need a tip? Use /tips";

/// Cadence used when none is configured.
const DEFAULT_TICK: Duration = Duration::from_secs(30);
/// The loop must wake at least once per trigger minute.
const MAX_TICK: Duration = Duration::from_secs(60);

/// Fires due reminder jobs from the registry.
pub struct ReminderScheduler {
    registry: Arc<JobRegistry>,
    notifier: Arc<dyn Notifier>,
    tick: Duration,
}

impl ReminderScheduler {
    pub fn new(registry: Arc<JobRegistry>, notifier: Arc<dyn Notifier>) -> Self {
        ReminderScheduler {
            registry,
            notifier,
            tick: DEFAULT_TICK,
        }
    }

    /// Override the clock cadence. Anything coarser than one minute would
    /// skip whole trigger minutes and is clamped down.
    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = if tick > MAX_TICK {
            warn!(
                "Clock tick of {}s is coarser than one minute, clamping to 60s",
                tick.as_secs()
            );
            MAX_TICK
        } else if tick.is_zero() {
            warn!("Zero clock tick requested, using 1s");
            Duration::from_secs(1)
        } else {
            tick
        };
        self
    }

    /// Install (or replace) the user's daily reminder.
    ///
    /// A trigger equal to the current minute first fires the next day,
    /// never seconds after the request.
    pub fn schedule(&self, user_id: &str, trigger: TimeOfDay) {
        self.schedule_at(user_id, trigger, Local::now());
    }

    /// Install against an explicit clock, letting tests pin the
    /// installation minute.
    pub fn schedule_at(&self, user_id: &str, trigger: TimeOfDay, now: DateTime<Local>) {
        self.registry.install_at(ReminderJob::new(user_id, trigger), now);
    }

    /// Remove the user's reminder. Returns whether one existed.
    pub fn unschedule(&self, user_id: &str) -> bool {
        self.registry.cancel(user_id)
    }

    /// The background clock loop.
    ///
    /// Runs until `shutdown` flips to true or its sender is dropped;
    /// pending ticks are discarded on shutdown without delivering
    /// anything.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        let mut ticker = tokio::time::interval(self.tick);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        info!("Reminder clock started ({}s cadence)", self.tick.as_secs());

        loop {
            tokio::select! {
                biased;
                // Shutdown wins over a tick that is already due
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        info!("Reminder clock stopped");
                        break;
                    }
                }
                _ = ticker.tick() => {
                    self.evaluate_at(Local::now()).await;
                }
            }
        }
    }

    /// One clock evaluation: claim every job due at `now` and deliver.
    ///
    /// Delivery errors are logged and swallowed; the job stays registered
    /// and fires again at its next matching time.
    pub async fn evaluate_at(&self, now: DateTime<Local>) {
        let due = self.registry.claim_due(now);
        if due.is_empty() {
            return;
        }
        debug!("{} reminder(s) due at {}", due.len(), now.format("%H:%M"));

        for user_id in due {
            match self.notifier.notify(&user_id, REMINDER_TEXT).await {
                Ok(()) => info!("Delivered reminder to user {user_id}"),
                Err(e) => error!("Failed to deliver reminder to user {user_id}: {e:#}"),
            }
        }
    }
}
