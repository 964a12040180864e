use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::scheduler::{self, Trigger};
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::utils::time::parse_local_datetime;
use chrono::Local;

fn print_triggers(owner: &str, triggers: &[Trigger]) {
    for t in triggers {
        println!(
            "{}  {:<11} {}",
            t.at.format("%Y-%m-%d %H:%M"),
            t.kind,
            owner
        );
    }
}

/// Pure trigger listing; nothing is scheduled or cancelled here.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reminders {
        from,
        days,
        shift,
        note,
    } = cmd
    {
        let from = match from {
            Some(s) => parse_local_datetime(s)?,
            None => Local::now(),
        };
        let horizon = days.unwrap_or(cfg.horizon_days);

        let pool = DbPool::new(&cfg.database)?;

        if let Some(id) = note {
            let n = queries::get_note(&pool.conn, *id)?;
            let shifts = queries::list_shifts(&pool.conn)?;
            let triggers = scheduler::compute_note_triggers(&n, &shifts, from, horizon);
            print_triggers(&format!("note:{id}"), &triggers);
            return Ok(());
        }

        let shifts = match shift {
            Some(id) => vec![queries::get_shift(&pool.conn, id)?],
            None => queries::list_shifts(&pool.conn)?,
        };

        for s in &shifts {
            let triggers = scheduler::compute_shift_triggers(s, from, horizon);
            print_triggers(&s.id, &triggers);
        }

        if shift.is_none() {
            let all_notes = queries::list_notes(&pool.conn)?;
            for n in &all_notes {
                let triggers = scheduler::compute_note_triggers(n, &shifts, from, horizon);
                print_triggers(&format!("note:{}", n.id), &triggers);
            }
        }
    }

    Ok(())
}
