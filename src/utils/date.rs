use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, Weekday};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

pub fn day_key(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// Parse a comma-separated weekday tag list ("Mon,Tue,Fri").
/// chrono accepts both short and full names, case-insensitive.
pub fn parse_days(s: &str) -> AppResult<Vec<Weekday>> {
    let mut out = Vec::new();
    for tag in s.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let day: Weekday = tag
            .parse()
            .map_err(|_| AppError::InvalidWeekday(tag.to_string()))?;
        if !out.contains(&day) {
            out.push(day);
        }
    }
    Ok(out)
}

pub fn day_tag(d: Weekday) -> &'static str {
    match d {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

pub fn format_days(days: &[Weekday]) -> String {
    days.iter()
        .map(|d| day_tag(*d))
        .collect::<Vec<_>>()
        .join(",")
}
