use chrono::{DateTime, Local};
use serde::Serialize;

/// Post-hoc classification of a finished day, computed independently of
/// the live state machine.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DayClassification {
    /// No go_work entry at all.
    Unknown,
    /// Day was started but check-in/check-out/complete are not all present.
    Incomplete(DayDetails),
    /// Full day, but check-in was late and/or check-out was early.
    Rv(DayDetails),
    /// Full day within the grace windows.
    Complete(DayDetails),
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct DayDetails {
    pub go_work_time: Option<DateTime<Local>>,
    pub check_in_time: Option<DateTime<Local>>,
    pub punch_time: Option<DateTime<Local>>,
    pub check_out_time: Option<DateTime<Local>>,
    pub complete_time: Option<DateTime<Local>>,
    /// check-out minus check-in, wall-clock minutes; present only when
    /// both ends exist.
    pub work_minutes: Option<i64>,
    pub is_late: bool,
    pub is_early: bool,
}
