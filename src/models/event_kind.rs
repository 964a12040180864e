use serde::Serialize;
use std::fmt;

/// The five attendance events a day can record, in forward order.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum EventKind {
    GoWork,
    CheckIn,
    Punch,
    CheckOut,
    Complete,
}

impl EventKind {
    /// Parse a user- or DB-supplied token. Accepts both `go_work` and
    /// the CLI spelling `go-work`.
    pub fn ek_from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "go_work" => Some(Self::GoWork),
            "check_in" => Some(Self::CheckIn),
            "punch" => Some(Self::Punch),
            "check_out" => Some(Self::CheckOut),
            "complete" => Some(Self::Complete),
            _ => None,
        }
    }

    pub fn ek_as_str(&self) -> &'static str {
        match self {
            EventKind::GoWork => "go_work",
            EventKind::CheckIn => "check_in",
            EventKind::Punch => "punch",
            EventKind::CheckOut => "check_out",
            EventKind::Complete => "complete",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.ek_as_str()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        Self::ek_from_str(s)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ek_as_str())
    }
}
