use chrono::{NaiveTime, Weekday};

/// A reminder note. Either tied to one or more shifts (fires on each
/// associated shift's applicable weekdays) or carrying its own weekday
/// tags; the two forms are mutually exclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub id: i64,
    pub text: String,
    pub reminder_time: NaiveTime,
    pub shift_ids: Vec<String>,
    pub days_applied: Vec<Weekday>,
}

impl Note {
    pub fn is_shift_bound(&self) -> bool {
        !self.shift_ids.is_empty()
    }
}
