use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::classification::{DayClassification, DayDetails};
use crate::utils::date::parse_date;
use crate::utils::time::{format_minutes, format_optional_ts};

fn print_details(d: &DayDetails) {
    println!("  go_work:   {}", format_optional_ts(d.go_work_time));
    println!("  check_in:  {}", format_optional_ts(d.check_in_time));
    println!("  punch:     {}", format_optional_ts(d.punch_time));
    println!("  check_out: {}", format_optional_ts(d.check_out_time));
    println!("  complete:  {}", format_optional_ts(d.complete_time));
    if let Some(m) = d.work_minutes {
        println!("  worked:    {} ({m} min)", format_minutes(m));
    }
    if d.is_late {
        println!("  check-in was late");
    }
    if d.is_early {
        println!("  check-out was early");
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Classify { date, shift } = cmd {
        let day = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.clone()))?;

        let pool = DbPool::new(&cfg.database)?;
        let shift = queries::get_shift(&pool.conn, shift)?;

        let tracker = super::open_tracker(cfg)?;
        match tracker.classify_day(day, &shift)? {
            DayClassification::Unknown => println!("{day}: unknown (no go_work entry)"),
            DayClassification::Incomplete(d) => {
                println!("{day}: incomplete");
                print_details(&d);
            }
            DayClassification::Rv(d) => {
                println!("{day}: rv (late check-in and/or early check-out)");
                print_details(&d);
            }
            DayClassification::Complete(d) => {
                println!("{day}: complete");
                print_details(&d);
            }
        }
    }

    Ok(())
}
