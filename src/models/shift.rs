use chrono::{NaiveTime, Weekday};
use std::fmt;

/// A recurring shift definition. All four times are wall-clock values
/// on a 24-hour wheel; `end_time` numerically before `start_time`
/// means the shift crosses midnight.
#[derive(Debug, Clone, PartialEq)]
pub struct Shift {
    pub id: String,
    pub name: String,
    pub departure_time: NaiveTime,
    pub start_time: NaiveTime,
    pub office_end_time: NaiveTime,
    pub end_time: NaiveTime,
    pub days_applied: Vec<Weekday>,
    pub remind_before_start: i32, // minutes, 0 disables the start reminder
    pub remind_after_end: i32,    // minutes, 0 disables the end reminder
    pub break_minutes: i32,
    pub active: bool,
}

impl Shift {
    /// True when the working interval crosses midnight.
    pub fn is_overnight(&self) -> bool {
        self.end_time < self.start_time
    }

    pub fn applies_on(&self, day: Weekday) -> bool {
        self.days_applied.contains(&day)
    }
}

/// Which shift field a definition error is tagged to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftField {
    DepartureTime,
    StartTime,
    OfficeEndTime,
    EndTime,
}

impl ShiftField {
    pub fn sf_as_str(&self) -> &'static str {
        match self {
            ShiftField::DepartureTime => "departure_time",
            ShiftField::StartTime => "start_time",
            ShiftField::OfficeEndTime => "office_end_time",
            ShiftField::EndTime => "end_time",
        }
    }
}

/// One violated time-relationship rule of a shift definition.
/// Validation collects every violation; it never stops at the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// departure → start gap under 5 minutes
    DepartureTooCloseToStart,
    /// start → office-end gap under 120 minutes
    WorkWindowTooShort,
    /// end falls before office-end on the shift's own scale
    EndBeforeOfficeEnd,
    /// end is after office-end but the overtime gap is under 30 minutes
    OvertimeTooShort,
}

impl FieldError {
    pub fn field(&self) -> ShiftField {
        match self {
            FieldError::DepartureTooCloseToStart => ShiftField::DepartureTime,
            FieldError::WorkWindowTooShort => ShiftField::OfficeEndTime,
            FieldError::EndBeforeOfficeEnd => ShiftField::EndTime,
            FieldError::OvertimeTooShort => ShiftField::EndTime,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            FieldError::DepartureTooCloseToStart => {
                "departure_time must precede start_time by at least 5 minutes"
            }
            FieldError::WorkWindowTooShort => {
                "office_end_time must follow start_time by at least 120 minutes"
            }
            FieldError::EndBeforeOfficeEnd => "end_time must not precede office_end_time",
            FieldError::OvertimeTooShort => {
                "end_time after office_end_time implies an overtime gap of at least 30 minutes"
            }
        };
        write!(f, "{}: {}", self.field().sf_as_str(), msg)
    }
}
