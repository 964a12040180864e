use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::validator::validate_shift_definition;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::shift::Shift;
use crate::ui::messages::success;
use crate::utils::date::{format_days, parse_days};
use crate::utils::time::required_time;

/// Derive a stable shift id from its name ("Night Shift" → "night-shift").
fn slug(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Shift {
        add,
        departure,
        start,
        office_end,
        end,
        days,
        remind_before,
        remind_after,
        break_minutes,
        list,
        del,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        //
        // 1. Create
        //
        if let Some(name) = add {
            let missing = |flag: &str| AppError::Config(format!("--{flag} is required with --add"));
            let departure = departure.as_ref().ok_or_else(|| missing("departure"))?;
            let start = start.as_ref().ok_or_else(|| missing("start"))?;
            let office_end = office_end.as_ref().ok_or_else(|| missing("office-end"))?;
            let end = end.as_ref().ok_or_else(|| missing("end"))?;

            let shift = Shift {
                id: slug(name),
                name: name.clone(),
                departure_time: required_time(departure)?,
                start_time: required_time(start)?,
                office_end_time: required_time(office_end)?,
                end_time: required_time(end)?,
                days_applied: days.as_deref().map(parse_days).transpose()?.unwrap_or_default(),
                remind_before_start: remind_before.unwrap_or(0).max(0),
                remind_after_end: remind_after.unwrap_or(0).max(0),
                break_minutes: break_minutes.unwrap_or(0).max(0),
                active: true,
            };

            // every violated rule is reported, not just the first
            let errors = validate_shift_definition(&shift);
            if !errors.is_empty() {
                return Err(AppError::ShiftDefinition(errors));
            }

            queries::insert_shift(&pool.conn, &shift)?;
            ttlog(&pool.conn, "shift_add", &shift.id, &shift.name)?;

            // a newly created shift gets its reminder set scheduled
            let mut tracker = super::open_tracker(cfg)?;
            let previous = queries::reminder_ids_for_owner(&pool.conn, &shift.id)?;
            tracker.restore_owner(&shift.id, previous);
            let triggers = tracker.resync_shift(&shift)?;

            success(format!(
                "Shift '{}' created (id: {}, {} reminder(s) scheduled)",
                shift.name,
                shift.id,
                triggers.len()
            ));
        }

        //
        // 2. List
        //
        if *list {
            let shifts = queries::list_shifts(&pool.conn)?;
            if shifts.is_empty() {
                println!("No shifts defined.");
            }
            for s in shifts {
                println!(
                    "{:<16} {:<20} {} → {} (office end {}, departure {})  days: {}",
                    s.id,
                    s.name,
                    s.start_time.format("%H:%M"),
                    s.end_time.format("%H:%M"),
                    s.office_end_time.format("%H:%M"),
                    s.departure_time.format("%H:%M"),
                    format_days(&s.days_applied),
                );
            }
        }

        //
        // 3. Delete
        //
        if let Some(id) = del {
            // cancel the shift's pending reminders before dropping it
            let mut tracker = super::open_tracker(cfg)?;
            let previous = queries::reminder_ids_for_owner(&pool.conn, id)?;
            tracker.restore_owner(id, previous);
            tracker.drop_owner(id)?;

            queries::delete_shift(&pool.conn, id)?;
            ttlog(&pool.conn, "shift_del", id, "shift deleted")?;
            success(format!("Shift '{id}' deleted"));
        }
    }

    Ok(())
}
