use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt;

/// States of the daily work-status machine, strict forward order.
/// The only backward path is a full day reset, which deletes the record.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DayState {
    #[default]
    NotStarted,
    WaitingCheckIn,
    Working,
    ReadyToComplete,
    Completed,
}

impl DayState {
    pub fn ds_as_str(&self) -> &'static str {
        match self {
            DayState::NotStarted => "not_started",
            DayState::WaitingCheckIn => "waiting_check_in",
            DayState::Working => "working",
            DayState::ReadyToComplete => "ready_to_complete",
            DayState::Completed => "completed",
        }
    }
}

impl fmt::Display for DayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ds_as_str())
    }
}

/// One calendar date's attendance progress, derived deterministically
/// by replaying that date's log entries in order.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct DailyWorkStatus {
    pub shift_id: Option<String>,
    pub state: DayState,
    pub go_work_time: Option<DateTime<Local>>,
    pub check_in_time: Option<DateTime<Local>>,
    pub punch_time: Option<DateTime<Local>>,
    pub check_out_time: Option<DateTime<Local>>,
    pub complete_time: Option<DateTime<Local>>,
}
