//! Post-hoc attendance classification.
//!
//! Pure and independent of the live state machine: it looks only at a
//! finished day's log set, e.g. for history views.

use crate::core::validator::{self, CheckInClass, CheckOutClass, Policy};
use crate::models::classification::{DayClassification, DayDetails};
use crate::models::event_kind::EventKind;
use crate::models::log_entry::LogEntry;
use crate::models::shift::Shift;
use chrono::{DateTime, Local};

fn last_of(entries: &[LogEntry], kind: EventKind) -> Option<DateTime<Local>> {
    entries
        .iter()
        .filter(|e| e.kind == kind)
        .map(|e| e.timestamp)
        .next_back()
}

/// Classify one day's logs against its shift.
///
/// No go_work entry → `Unknown`. A started day missing any of
/// check-in/check-out/complete → `Incomplete` (punch is optional and
/// never gates completeness). A full day classifies `Rv` when the
/// check-in was late or the check-out early, `Complete` otherwise.
pub fn classify(entries: &[LogEntry], shift: &Shift, policy: &Policy) -> DayClassification {
    let go_work = last_of(entries, EventKind::GoWork);
    let check_in = last_of(entries, EventKind::CheckIn);
    let punch = last_of(entries, EventKind::Punch);
    let check_out = last_of(entries, EventKind::CheckOut);
    let complete = last_of(entries, EventKind::Complete);

    if go_work.is_none() {
        return DayClassification::Unknown;
    }

    let mut details = DayDetails {
        go_work_time: go_work,
        check_in_time: check_in,
        punch_time: punch,
        check_out_time: check_out,
        complete_time: complete,
        work_minutes: None,
        is_late: false,
        is_early: false,
    };

    if let (Some(ci), Some(co)) = (check_in, check_out) {
        details.work_minutes = Some((co - ci).num_minutes());
    }

    let (Some(ci), Some(co), Some(_)) = (check_in, check_out, complete) else {
        return DayClassification::Incomplete(details);
    };

    details.is_late = validator::classify_check_in(ci, shift, policy) == CheckInClass::Late;
    details.is_early =
        validator::classify_check_out(co, ci, shift, policy) == CheckOutClass::Early;

    if details.is_late || details.is_early {
        DayClassification::Rv(details)
    } else {
        DayClassification::Complete(details)
    }
}
