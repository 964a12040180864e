//! Shift-definition validation and check-in/check-out classification.
//!
//! All gap checks run on the 24-hour wheel via `time_arith`, anchored
//! at `start_time`, so overnight shifts validate exactly like same-day
//! ones.

use crate::core::time_arith::{interval_minutes, is_within_window, minute_of_day};
use crate::models::event_kind::EventKind;
use crate::models::shift::{FieldError, Shift};
use chrono::{DateTime, Days, Local};
use std::fmt;

pub const MIN_DEPARTURE_GAP: i32 = 5;
pub const MIN_WORK_WINDOW: i32 = 120;
pub const MIN_OVERTIME_GAP: i32 = 30;

/// Tunable classification constants. The defaults are the historical
/// values; both can be overridden from the configuration file.
#[derive(Debug, Clone, Copy)]
pub struct Policy {
    /// Tolerance before a check-in counts as late / a check-out as early.
    pub grace_minutes: i32,
    /// How far outside [start, end] an event may fall before it is
    /// flagged as implausible.
    pub plausibility_buffer: i32,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            grace_minutes: 15,
            plausibility_buffer: 120,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckInClass {
    OnTime,
    Late,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutClass {
    OnTime,
    Early,
}

/// Advisory signal for an event recorded outside the expected shift
/// window. Never blocks the transition.
#[derive(Debug, Clone, PartialEq)]
pub struct PlausibilityWarning {
    pub shift_id: String,
    pub kind: EventKind,
    pub timestamp: DateTime<Local>,
}

impl fmt::Display for PlausibilityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "event '{}' at {} falls outside the expected window of shift '{}'",
            self.kind,
            self.timestamp.format("%Y-%m-%d %H:%M"),
            self.shift_id
        )
    }
}

/// Check every time-relationship invariant of a shift definition and
/// collect all violations; never stops at the first one.
pub fn validate_shift_definition(shift: &Shift) -> Vec<FieldError> {
    let dep = minute_of_day(shift.departure_time);
    let start = minute_of_day(shift.start_time);
    let office_end = minute_of_day(shift.office_end_time);
    let end = minute_of_day(shift.end_time);

    let mut errors = Vec::new();

    // departure → start, on the wheel (a 23:50 departure for a 00:10
    // start is a 20-minute gap, not a violation)
    if interval_minutes(dep, start) < MIN_DEPARTURE_GAP {
        errors.push(FieldError::DepartureTooCloseToStart);
    }

    // start → office-end
    let office_end_off = interval_minutes(start, office_end);
    if office_end_off < MIN_WORK_WINDOW {
        errors.push(FieldError::WorkWindowTooShort);
    }

    // office-end → end, measured as offsets from start so "before" and
    // "after" stay well-defined for overnight shifts
    let end_off = interval_minutes(start, end);
    if end_off < office_end_off {
        errors.push(FieldError::EndBeforeOfficeEnd);
    } else if end_off > office_end_off && end_off - office_end_off < MIN_OVERTIME_GAP {
        errors.push(FieldError::OvertimeTooShort);
    }

    errors
}

/// Late iff the check-in lands more than `grace_minutes` past the
/// shift's start time.
pub fn classify_check_in(timestamp: DateTime<Local>, shift: &Shift, policy: &Policy) -> CheckInClass {
    let sample = minute_of_day(timestamp.time());
    let start = minute_of_day(shift.start_time);
    if sample > start + policy.grace_minutes {
        CheckInClass::Late
    } else {
        CheckInClass::OnTime
    }
}

/// Classify a check-out against `office_end_time`.
///
/// Same-day shifts apply the grace window; overnight shifts compare on
/// a wrapped scale anchored at the check-in's working date, which makes
/// a post-midnight 02:10 check-out against a 02:00 office end on-time
/// and a 01:50 one early.
pub fn classify_check_out(
    timestamp: DateTime<Local>,
    check_in: DateTime<Local>,
    shift: &Shift,
    policy: &Policy,
) -> CheckOutClass {
    let start = minute_of_day(shift.start_time);
    let office_end = minute_of_day(shift.office_end_time);
    let sample = minute_of_day(timestamp.time());

    if office_end < start {
        // A check-in after midnight belongs to the previous working date.
        let anchor = if minute_of_day(check_in.time()) >= start {
            check_in.date_naive()
        } else {
            check_in
                .date_naive()
                .checked_sub_days(Days::new(1))
                .unwrap_or_else(|| check_in.date_naive())
        };
        let days = (timestamp.date_naive() - anchor).num_days() as i32;
        let wrapped_sample = days * 1440 + sample;
        let wrapped_end = 1440 + office_end;
        if wrapped_sample < wrapped_end {
            CheckOutClass::Early
        } else {
            CheckOutClass::OnTime
        }
    } else if sample < office_end - policy.grace_minutes {
        CheckOutClass::Early
    } else {
        CheckOutClass::OnTime
    }
}

/// Soft plausibility check: the event's minute-of-day must fall within
/// [start, end] (overnight-aware) buffered on both ends. Advisory only;
/// the state machine records the event regardless.
pub fn is_log_plausible(timestamp: DateTime<Local>, shift: &Shift, policy: &Policy) -> bool {
    is_within_window(
        minute_of_day(timestamp.time()),
        minute_of_day(shift.start_time),
        minute_of_day(shift.end_time),
        policy.plausibility_buffer,
    )
}
