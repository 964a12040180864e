//! Time utilities: parsing HH:MM, local datetime assembly, formatting
//! minutes.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

/// Strict "HH:MM" parse. chrono's `%H:%M` accepts single-digit fields
/// ("8:3" would read as 08:03), so the shape is checked first.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let b = t.as_bytes();
    if b.len() != 5 || b[2] != b':' {
        return None;
    }
    if ![b[0], b[1], b[3], b[4]].iter().all(u8::is_ascii_digit) {
        return None;
    }
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

pub fn required_time(t: &str) -> AppResult<NaiveTime> {
    parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

/// Attach a wall-clock time to a date in the local timezone. On a DST
/// fold the earlier instant wins.
pub fn local_datetime(date: NaiveDate, time: NaiveTime) -> DateTime<Local> {
    let naive = date.and_time(time);
    match Local.from_local_datetime(&naive) {
        chrono::LocalResult::Single(dt) | chrono::LocalResult::Ambiguous(dt, _) => dt,
        // skipped by a DST gap: nudge forward an hour
        chrono::LocalResult::None => {
            let shifted = naive + chrono::Duration::hours(1);
            Local
                .from_local_datetime(&shifted)
                .earliest()
                .unwrap_or_else(|| Local::now())
        }
    }
}

/// Parse "YYYY-MM-DD HH:MM" into a local timestamp.
pub fn parse_local_datetime(s: &str) -> AppResult<DateTime<Local>> {
    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M")
        .map_err(|_| AppError::InvalidDate(s.to_string()))?;
    Ok(local_datetime(naive.date(), naive.time()))
}

pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

pub fn format_optional_ts(ts: Option<DateTime<Local>>) -> String {
    match ts {
        Some(t) => t.format("%H:%M").to_string(),
        None => "--:--".to_string(),
    }
}
