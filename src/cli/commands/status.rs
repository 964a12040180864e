use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::utils::date::{parse_date, today};
use crate::utils::time::format_optional_ts;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { date, json } = cmd {
        let day = match date {
            Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => today(),
        };

        let tracker = super::open_tracker(cfg)?;
        let status = tracker.current_status(day)?;

        if *json {
            let out = serde_json::to_string_pretty(&status)
                .map_err(|e| AppError::Other(e.to_string()))?;
            println!("{out}");
        } else {
            println!("Status for {day}: {}", status.state);
            if let Some(id) = &status.shift_id {
                println!("  shift:     {id}");
            }
            println!("  go_work:   {}", format_optional_ts(status.go_work_time));
            println!("  check_in:  {}", format_optional_ts(status.check_in_time));
            println!("  punch:     {}", format_optional_ts(status.punch_time));
            println!("  check_out: {}", format_optional_ts(status.check_out_time));
            println!("  complete:  {}", format_optional_ts(status.complete_time));
        }
    }

    Ok(())
}
