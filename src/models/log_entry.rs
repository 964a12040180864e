use super::event_kind::EventKind;
use chrono::{DateTime, Local, NaiveDate};
use serde::Serialize;

/// One append-only attendance log row.
/// A day's log is the ordered sequence of entries whose timestamp falls
/// on that local calendar date; entries are never edited, only appended
/// or deleted wholesale by a day reset.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub id: i64,                     // ⇔ logs.id (INTEGER PK)
    pub shift_id: String,            // ⇔ logs.shift_id (TEXT)
    pub kind: EventKind,             // ⇔ logs.kind ('go_work' | ... | 'complete')
    pub timestamp: DateTime<Local>,  // ⇔ logs.timestamp (TEXT, RFC 3339)
}

impl LogEntry {
    /// Constructor for entries created by the tracker. `id = 0` until
    /// the store assigns the real rowid on append.
    pub fn new(shift_id: &str, kind: EventKind, timestamp: DateTime<Local>) -> Self {
        Self {
            id: 0,
            shift_id: shift_id.to_string(),
            kind,
            timestamp,
        }
    }

    /// The local calendar date this entry belongs to.
    pub fn day(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    pub fn day_key(&self) -> String {
        self.day().format("%Y-%m-%d").to_string()
    }
}
