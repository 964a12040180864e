use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::tracker::note_owner;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::note::Note;
use crate::ui::messages::success;
use crate::utils::date::{format_days, parse_days};
use crate::utils::time::required_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Note {
        add,
        at,
        shifts,
        days,
        list,
        del,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        //
        // 1. Create
        //
        if let Some(text) = add {
            let at = at
                .as_ref()
                .ok_or_else(|| AppError::Config("--at is required with --add".to_string()))?;

            // shift association and explicit weekday tags are mutually exclusive
            if shifts.is_some() && days.is_some() {
                return Err(AppError::Config(
                    "--shifts and --days are mutually exclusive".to_string(),
                ));
            }
            if shifts.is_none() && days.is_none() {
                return Err(AppError::Config(
                    "a note needs either --shifts or --days".to_string(),
                ));
            }

            let shift_ids: Vec<String> = shifts
                .as_deref()
                .map(|s| {
                    s.split(',')
                        .map(str::trim)
                        .filter(|t| !t.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default();

            // associated shifts must exist
            for id in &shift_ids {
                queries::get_shift(&pool.conn, id)?;
            }

            let note = Note {
                id: 0,
                text: text.clone(),
                reminder_time: required_time(at)?,
                shift_ids,
                days_applied: days.as_deref().map(parse_days).transpose()?.unwrap_or_default(),
            };

            let id = queries::insert_note(&pool.conn, &note)?;
            ttlog(&pool.conn, "note_add", &id.to_string(), text)?;

            let note = queries::get_note(&pool.conn, id)?;
            let all_shifts = queries::list_shifts(&pool.conn)?;
            let mut tracker = super::open_tracker(cfg)?;
            let owner = note_owner(id);
            let previous = queries::reminder_ids_for_owner(&pool.conn, &owner)?;
            tracker.restore_owner(&owner, previous);
            let triggers = tracker.resync_note(&note, &all_shifts)?;

            success(format!(
                "Note {} created ({} reminder(s) scheduled)",
                id,
                triggers.len()
            ));
        }

        //
        // 2. List
        //
        if *list {
            let notes = queries::list_notes(&pool.conn)?;
            if notes.is_empty() {
                println!("No notes defined.");
            }
            for n in notes {
                let scope = if n.is_shift_bound() {
                    format!("shifts: {}", n.shift_ids.join(","))
                } else {
                    format!("days: {}", format_days(&n.days_applied))
                };
                println!(
                    "{:<4} {}  at {}  ({})",
                    n.id,
                    n.text,
                    n.reminder_time.format("%H:%M"),
                    scope
                );
            }
        }

        //
        // 3. Delete
        //
        if let Some(id) = del {
            let owner = note_owner(*id);
            let mut tracker = super::open_tracker(cfg)?;
            let previous = queries::reminder_ids_for_owner(&pool.conn, &owner)?;
            tracker.restore_owner(&owner, previous);
            tracker.drop_owner(&owner)?;

            queries::delete_note(&pool.conn, *id)?;
            ttlog(&pool.conn, "note_del", &id.to_string(), "note deleted")?;
            success(format!("Note {id} deleted"));
        }
    }

    Ok(())
}
