//! # Job Registry
//!
//! Authoritative store of active reminder jobs, at most one per user.
//!
//! - **Version**: 1.2.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.2.0: Installation inside the trigger minute counts as fired today, supersedes the 1.1.0 carry
//! - 1.1.0: Replacement with an unchanged trigger keeps the fired-today marker
//! - 1.0.0: Initial release

use chrono::{DateTime, Local, NaiveDate};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use log::{debug, info};

use super::TimeOfDay;
use crate::core::UserId;

/// One recurring scheduled obligation for a user.
#[derive(Debug, Clone)]
pub struct ReminderJob {
    /// Owning user.
    pub user_id: UserId,
    /// Daily firing time.
    pub trigger: TimeOfDay,
    /// When the job was installed.
    pub installed_at: DateTime<Local>,
    /// Last calendar day this job fired. Guards against a second delivery
    /// when the clock ticks more than once inside the trigger minute.
    last_fired: Option<NaiveDate>,
}

impl ReminderJob {
    pub fn new(user_id: impl Into<UserId>, trigger: TimeOfDay) -> Self {
        ReminderJob {
            user_id: user_id.into(),
            trigger,
            installed_at: Local::now(),
            last_fired: None,
        }
    }

    /// Whether this job already fired on the given day.
    pub fn fired_on(&self, day: NaiveDate) -> bool {
        self.last_fired == Some(day)
    }
}

/// Concurrency-safe user -> active job map.
///
/// `install` replaces, never rejects: scheduling twice leaves exactly one
/// job. The clock loop reads through `claim_due` while the request path
/// installs and cancels; the map serializes access per key.
pub struct JobRegistry {
    jobs: DashMap<UserId, ReminderJob>,
}

impl JobRegistry {
    pub fn new() -> Self {
        JobRegistry {
            jobs: DashMap::new(),
        }
    }

    /// Install `job`, replacing any job the user already has.
    pub fn install(&self, job: ReminderJob) {
        self.install_at(job, Local::now());
    }

    /// Install against an explicit clock.
    ///
    /// A job installed inside its own trigger minute counts as having
    /// fired today: the first delivery is the next day's occurrence, and
    /// re-installing a trigger inside its already-fired minute cannot
    /// deliver a second reminder that day.
    pub fn install_at(&self, mut job: ReminderJob, now: DateTime<Local>) {
        if job.trigger.matches(now) {
            job.last_fired = Some(now.date_naive());
        }
        match self.jobs.entry(job.user_id.clone()) {
            Entry::Occupied(mut slot) => {
                info!(
                    "Replaced reminder for user {}: {} -> {}",
                    job.user_id,
                    slot.get().trigger,
                    job.trigger
                );
                slot.insert(job);
            }
            Entry::Vacant(slot) => {
                info!("Installed reminder for user {} at {}", job.user_id, job.trigger);
                slot.insert(job);
            }
        }
    }

    /// Remove the user's job. Returns false when there was nothing to
    /// cancel.
    pub fn cancel(&self, user_id: &str) -> bool {
        match self.jobs.remove(user_id) {
            Some((_, job)) => {
                info!("Cancelled reminder for user {user_id} (was {})", job.trigger);
                true
            }
            None => {
                debug!("Cancel for user {user_id}: no active job");
                false
            }
        }
    }

    /// Read-only snapshot of the user's job, if any.
    pub fn lookup(&self, user_id: &str) -> Option<ReminderJob> {
        self.jobs.get(user_id).map(|job| job.value().clone())
    }

    /// Collect every job due at `now` that has not fired today, marking
    /// each as fired while its entry is locked. Delivery happens after
    /// the locks are released.
    pub fn claim_due(&self, now: DateTime<Local>) -> Vec<UserId> {
        let today = now.date_naive();
        let mut due = Vec::new();
        for mut job in self.jobs.iter_mut() {
            if job.trigger.matches(now) && !job.fired_on(today) {
                job.last_fired = Some(today);
                due.push(job.user_id.clone());
            }
        }
        due
    }

    /// Number of active jobs.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

impl Default for JobRegistry {
    fn default() -> Self {
        Self::new()
    }
}
