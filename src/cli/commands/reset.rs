use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date::parse_date;

/// Delete one day's logs and status, then cancel and reschedule the
/// shift's future reminders from now so nothing fires twice for the
/// wiped completion state. Without --shift the shift is taken from the
/// day's own status; a day that never attached one skips the resync.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { date, shift } = cmd {
        let day = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.clone()))?;

        let pool = DbPool::new(&cfg.database)?;
        let mut tracker = super::open_tracker(cfg)?;

        let shift = match shift {
            Some(id) => Some(queries::get_shift(&pool.conn, id)?),
            None => match tracker.current_status(day)?.shift_id {
                // the recorded shift may have been deleted since
                Some(id) => match queries::get_shift(&pool.conn, &id) {
                    Ok(s) => Some(s),
                    Err(AppError::UnknownShift(_)) => None,
                    Err(e) => return Err(e),
                },
                None => None,
            },
        };

        if let Some(s) = &shift {
            let previous = queries::reminder_ids_for_owner(&pool.conn, &s.id)?;
            tracker.restore_owner(&s.id, previous);
        }

        let removed = tracker.reset_day(day, shift.as_ref())?;
        ttlog(
            &pool.conn,
            "reset",
            &day.to_string(),
            &format!("{removed} log entries removed"),
        )?;
        success(format!("Day {day} reset ({removed} entries removed)"));
    }

    Ok(())
}
