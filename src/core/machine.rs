//! The daily work-status state machine.
//!
//! `not_started → waiting_check_in → working → ready_to_complete →
//! completed`, no skipping, no backward step; a full day reset (which
//! deletes logs and status) is the only way back. `punch` is the one
//! self-loop: informational, repeatable, overwrites its timestamp.

use crate::errors::{AppError, AppResult};
use crate::models::day_status::{DailyWorkStatus, DayState};
use crate::models::event_kind::EventKind;
use crate::models::log_entry::LogEntry;

/// Apply one log entry to a status. Pure; returns the next status or
/// `InvalidTransition` leaving the input untouched.
pub fn apply(status: &DailyWorkStatus, entry: &LogEntry) -> AppResult<DailyWorkStatus> {
    let mut next = status.clone();

    match (status.state, entry.kind) {
        (DayState::NotStarted, EventKind::GoWork) => {
            next.shift_id = Some(entry.shift_id.clone());
            next.go_work_time = Some(entry.timestamp);
            next.state = DayState::WaitingCheckIn;
        }
        (DayState::WaitingCheckIn, EventKind::CheckIn) => {
            next.check_in_time = Some(entry.timestamp);
            next.state = DayState::Working;
        }
        (DayState::Working, EventKind::Punch) => {
            // repeatable; latest punch wins, state unchanged
            next.punch_time = Some(entry.timestamp);
        }
        (DayState::Working, EventKind::CheckOut) => {
            next.check_out_time = Some(entry.timestamp);
            next.state = DayState::ReadyToComplete;
        }
        (DayState::ReadyToComplete, EventKind::Complete) => {
            next.complete_time = Some(entry.timestamp);
            next.state = DayState::Completed;
        }
        (state, event) => {
            return Err(AppError::InvalidTransition { state, event });
        }
    }

    Ok(next)
}

/// Rebuild a day's status by replaying its ordered log entries from the
/// default (absent) record. The log store only ever receives entries
/// that passed `apply`, so a replay failure means the log was tampered
/// with out of band.
pub fn replay(entries: &[LogEntry]) -> AppResult<DailyWorkStatus> {
    let mut status = DailyWorkStatus::default();
    for entry in entries {
        status = apply(&status, entry)?;
    }
    Ok(status)
}
