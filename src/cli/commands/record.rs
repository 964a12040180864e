use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::event_kind::EventKind;
use crate::models::shift::Shift;
use crate::ui::messages::{success, warning};
use crate::utils::time::{format_optional_ts, parse_local_datetime};
use chrono::Local;
use rusqlite::Connection;

/// Pick the shift an event belongs to: the explicit --shift id, the
/// shift already attached to today's status, or the sole defined shift.
fn resolve_shift(
    conn: &Connection,
    cfg: &Config,
    explicit: Option<&String>,
    day: chrono::NaiveDate,
) -> AppResult<Shift> {
    if let Some(id) = explicit {
        return queries::get_shift(conn, id);
    }

    let tracker = super::open_tracker(cfg)?;
    if let Some(id) = tracker.current_status(day)?.shift_id {
        return queries::get_shift(conn, &id);
    }

    let mut shifts = queries::list_shifts(conn)?;
    if shifts.len() == 1 {
        return Ok(shifts.remove(0));
    }
    Err(AppError::UnknownShift(
        "ambiguous; pass --shift ID".to_string(),
    ))
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Record { event, shift, at } = cmd {
        let kind = EventKind::ek_from_str(event)
            .ok_or_else(|| AppError::InvalidEventKind(event.clone()))?;

        let timestamp = match at {
            Some(s) => parse_local_datetime(s)?,
            None => Local::now(),
        };

        let pool = DbPool::new(&cfg.database)?;
        let shift = resolve_shift(&pool.conn, cfg, shift.as_ref(), timestamp.date_naive())?;

        let mut tracker = super::open_tracker(cfg)?;
        let outcome = tracker.record_event_at(&shift, kind, timestamp)?;

        ttlog(
            &pool.conn,
            "record",
            kind.ek_as_str(),
            &format!("shift {} at {}", shift.id, timestamp.format("%Y-%m-%d %H:%M")),
        )?;

        // implausible timestamps warn but never block
        if let Some(w) = &outcome.warning {
            warning(w);
        }

        let s = &outcome.status;
        success(format!("{} recorded, state: {}", kind, s.state));
        println!(
            "  go_work {}  check_in {}  punch {}  check_out {}  complete {}",
            format_optional_ts(s.go_work_time),
            format_optional_ts(s.check_in_time),
            format_optional_ts(s.punch_time),
            format_optional_ts(s.check_out_time),
            format_optional_ts(s.complete_time),
        );
    }

    Ok(())
}
