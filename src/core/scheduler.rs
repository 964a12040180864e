//! Reminder trigger computation.
//!
//! Stateless: given a shift or note and an evaluation instant, produce
//! the concrete future trigger timestamps inside the horizon. The
//! caller owns all bookkeeping of previously issued notification ids
//! and must cancel them before scheduling anew.

use crate::models::note::Note;
use crate::models::shift::Shift;
use crate::utils::time::local_datetime;
use chrono::{DateTime, Datelike, Days, Duration, Local};
use serde::Serialize;
use std::fmt;

pub const DEFAULT_HORIZON_DAYS: u64 = 7;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReminderKind {
    ShiftStart,
    ShiftEnd,
    Note,
}

impl ReminderKind {
    pub fn rk_as_str(&self) -> &'static str {
        match self {
            ReminderKind::ShiftStart => "shift_start",
            ReminderKind::ShiftEnd => "shift_end",
            ReminderKind::Note => "note",
        }
    }
}

impl fmt::Display for ReminderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rk_as_str())
    }
}

/// One concrete future firing instant.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Trigger {
    pub kind: ReminderKind,
    pub at: DateTime<Local>,
}

/// Trigger timestamps for a shift's start/end reminders over the next
/// `horizon_days` calendar days (including `from`'s own date).
///
/// A reminder minute count of 0 disables that reminder. For overnight
/// shifts the end trigger's date is advanced by one day, since the end
/// time belongs to the morning after the start date. Anything not
/// strictly after `from` is discarded.
pub fn compute_shift_triggers(shift: &Shift, from: DateTime<Local>, horizon_days: u64) -> Vec<Trigger> {
    let mut out = Vec::new();

    for offset in 0..horizon_days {
        let Some(day) = from.date_naive().checked_add_days(Days::new(offset)) else {
            break;
        };
        if !shift.applies_on(day.weekday()) {
            continue;
        }

        if shift.remind_before_start > 0 {
            let at = local_datetime(day, shift.start_time)
                - Duration::minutes(shift.remind_before_start as i64);
            if at > from {
                out.push(Trigger {
                    kind: ReminderKind::ShiftStart,
                    at,
                });
            }
        }

        if shift.remind_after_end > 0 {
            let end_day = if shift.is_overnight() {
                day.checked_add_days(Days::new(1))
            } else {
                Some(day)
            };
            if let Some(end_day) = end_day {
                let at = local_datetime(end_day, shift.end_time)
                    - Duration::minutes(shift.remind_after_end as i64);
                if at > from {
                    out.push(Trigger {
                        kind: ReminderKind::ShiftEnd,
                        at,
                    });
                }
            }
        }
    }

    out.sort_by_key(|t| t.at);
    out
}

/// Trigger timestamps for a note.
///
/// Shift-bound notes fire at `reminder_time` on every horizon day
/// applicable to each associated shift (one trigger per shift per day);
/// tag-based notes fire on their own weekday tags. The two forms are
/// mutually exclusive by construction.
pub fn compute_note_triggers(
    note: &Note,
    shifts: &[Shift],
    from: DateTime<Local>,
    horizon_days: u64,
) -> Vec<Trigger> {
    let mut out = Vec::new();

    for offset in 0..horizon_days {
        let Some(day) = from.date_naive().checked_add_days(Days::new(offset)) else {
            break;
        };

        let fires = if note.is_shift_bound() {
            note.shift_ids
                .iter()
                .filter_map(|id| shifts.iter().find(|s| &s.id == id))
                .filter(|s| s.applies_on(day.weekday()))
                .count()
        } else if note.days_applied.contains(&day.weekday()) {
            1
        } else {
            0
        };

        let at = local_datetime(day, note.reminder_time);
        if at <= from {
            continue;
        }
        for _ in 0..fires {
            out.push(Trigger {
                kind: ReminderKind::Note,
                at,
            });
        }
    }

    out
}
