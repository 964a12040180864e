#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Local, NaiveDate, NaiveTime, Weekday};
use shiftlog::core::ports::{LogStore, NotificationPort, ReminderPayload};
use shiftlog::errors::{AppError, AppResult};
use shiftlog::models::log_entry::LogEntry;
use shiftlog::models::shift::Shift;
use shiftlog::utils::time::local_datetime;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn slg() -> Command {
    cargo_bin_cmd!("shiftlog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shiftlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize the schema and add a standard day shift useful for many tests
pub fn init_db_with_day_shift(db_path: &str) {
    slg()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    slg()
        .args([
            "--db",
            db_path,
            "shift",
            "--add",
            "Day Shift",
            "--departure",
            "07:30",
            "--start",
            "08:00",
            "--office-end",
            "17:00",
            "--end",
            "17:00",
            "--days",
            "Mon,Tue,Wed,Thu,Fri",
            "--remind-before",
            "15",
        ])
        .assert()
        .success();
}

// ---------------------------------------------------------------
// Library-level fixtures
// ---------------------------------------------------------------

pub fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

pub fn d(y: i32, mo: u32, da: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, mo, da).unwrap()
}

pub fn at(date: NaiveDate, h: u32, m: u32) -> DateTime<Local> {
    local_datetime(date, t(h, m))
}

/// A regular 08:00–17:00 same-day shift, no overtime.
pub fn day_shift() -> Shift {
    Shift {
        id: "day-shift".to_string(),
        name: "Day Shift".to_string(),
        departure_time: t(7, 30),
        start_time: t(8, 0),
        office_end_time: t(17, 0),
        end_time: t(17, 0),
        days_applied: vec![
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
        ],
        remind_before_start: 15,
        remind_after_end: 0,
        break_minutes: 60,
        active: true,
    }
}

/// An overnight 22:00–02:30 shift whose office end is 02:00.
pub fn night_shift() -> Shift {
    Shift {
        id: "night-shift".to_string(),
        name: "Night Shift".to_string(),
        departure_time: t(21, 40),
        start_time: t(22, 0),
        office_end_time: t(2, 0),
        end_time: t(2, 30),
        days_applied: vec![Weekday::Mon, Weekday::Tue, Weekday::Wed],
        remind_before_start: 20,
        remind_after_end: 10,
        break_minutes: 30,
        active: true,
    }
}

/// In-memory LogStore for tracker tests.
#[derive(Default)]
pub struct MemoryLogStore {
    pub entries: Vec<LogEntry>,
    next_id: i64,
}

impl LogStore for MemoryLogStore {
    fn append(&mut self, entry: &LogEntry) -> AppResult<i64> {
        self.next_id += 1;
        let mut stored = entry.clone();
        stored.id = self.next_id;
        self.entries.push(stored);
        Ok(self.next_id)
    }

    fn entries_for(&self, day: NaiveDate) -> AppResult<Vec<LogEntry>> {
        Ok(self
            .entries
            .iter()
            .filter(|e| e.day() == day)
            .cloned()
            .collect())
    }

    fn delete_day(&mut self, day: NaiveDate) -> AppResult<usize> {
        let before = self.entries.len();
        self.entries.retain(|e| e.day() != day);
        Ok(before - self.entries.len())
    }
}

/// In-memory NotificationPort remembering both live and cancelled ids.
#[derive(Default)]
pub struct MemoryNotifier {
    pub scheduled: Vec<(i64, DateTime<Local>, ReminderPayload)>,
    pub cancelled: Vec<i64>,
    pub fail_next: bool,
    next_id: i64,
}

impl NotificationPort for MemoryNotifier {
    fn schedule(&mut self, when: DateTime<Local>, payload: &ReminderPayload) -> AppResult<i64> {
        if self.fail_next {
            self.fail_next = false;
            return Err(AppError::Scheduling("notification service down".to_string()));
        }
        self.next_id += 1;
        self.scheduled.push((self.next_id, when, payload.clone()));
        Ok(self.next_id)
    }

    fn cancel(&mut self, id: i64) -> AppResult<()> {
        self.scheduled.retain(|(i, _, _)| *i != id);
        self.cancelled.push(id);
        Ok(())
    }
}
