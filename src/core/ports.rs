//! Boundary traits the core consumes: wall clock, log storage and the
//! notification service. Concrete SQLite-backed implementations live in
//! `crate::db`; tests substitute in-memory ones.

use crate::core::scheduler::ReminderKind;
use crate::errors::AppResult;
use crate::models::log_entry::LogEntry;
use chrono::{DateTime, Local, NaiveDate};

/// Injectable time source.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Production clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Deterministic clock for tests.
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// Append-only per-day attendance log storage.
pub trait LogStore {
    /// Persist one entry; returns the assigned id.
    fn append(&mut self, entry: &LogEntry) -> AppResult<i64>;

    /// All entries whose timestamp falls on `day`, in insertion order.
    fn entries_for(&self, day: NaiveDate) -> AppResult<Vec<LogEntry>>;

    /// Drop every entry of `day`; returns how many were removed.
    fn delete_day(&mut self, day: NaiveDate) -> AppResult<usize>;
}

/// What a scheduled reminder will carry when it fires.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderPayload {
    /// Shift id or note id the reminder belongs to.
    pub owner: String,
    pub kind: ReminderKind,
    pub message: String,
}

/// External notification service with schedule/cancel primitives.
/// Failures surface as `AppError::Scheduling`; the core never retries.
pub trait NotificationPort {
    fn schedule(&mut self, at: DateTime<Local>, payload: &ReminderPayload) -> AppResult<i64>;
    fn cancel(&mut self, id: i64) -> AppResult<()>;
}

// Mutable borrows satisfy the ports too, so callers can keep inspecting
// a store or notifier they lend to a tracker.
impl<C: Clock> Clock for &C {
    fn now(&self) -> DateTime<Local> {
        (**self).now()
    }
}

impl<S: LogStore> LogStore for &mut S {
    fn append(&mut self, entry: &LogEntry) -> AppResult<i64> {
        (**self).append(entry)
    }

    fn entries_for(&self, day: NaiveDate) -> AppResult<Vec<LogEntry>> {
        (**self).entries_for(day)
    }

    fn delete_day(&mut self, day: NaiveDate) -> AppResult<usize> {
        (**self).delete_day(day)
    }
}

impl<N: NotificationPort> NotificationPort for &mut N {
    fn schedule(&mut self, at: DateTime<Local>, payload: &ReminderPayload) -> AppResult<i64> {
        (**self).schedule(at, payload)
    }

    fn cancel(&mut self, id: i64) -> AppResult<()> {
        (**self).cancel(id)
    }
}
