//! Minutes-since-midnight arithmetic, overnight-aware.
//! Everything downstream (validator, scheduler) measures gaps through
//! these helpers so wraparound is handled in exactly one place.

use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_time;
use chrono::{NaiveTime, Timelike};

pub const MINUTES_PER_DAY: i32 = 1440;

/// Parse a strict "HH:MM" string into minutes since midnight, [0, 1440).
pub fn to_minutes(s: &str) -> AppResult<i32> {
    let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
    Ok(minute_of_day(t))
}

pub fn minute_of_day(t: NaiveTime) -> i32 {
    (t.hour() * 60 + t.minute()) as i32
}

/// `end - start` on the 24-hour wheel: wraps past midnight when
/// `end < start`. Result is always in [0, 1440).
pub fn interval_minutes(start: i32, end: i32) -> i32 {
    if end >= start {
        end - start
    } else {
        end - start + MINUTES_PER_DAY
    }
}

/// Whether `sample` falls inside the window [low, high] extended by
/// `buffer` on both ends. A window with `high < low` crosses midnight
/// and is treated as [low, 1440) ∪ [0, high].
pub fn is_within_window(sample: i32, low: i32, high: i32, buffer: i32) -> bool {
    if high < low {
        sample >= low - buffer || sample <= high + buffer
    } else {
        sample >= low - buffer && sample <= high + buffer
    }
}
