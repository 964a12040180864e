pub mod classify;
pub mod config;
pub mod init;
pub mod log;
pub mod note;
pub mod record;
pub mod reminders;
pub mod reset;
pub mod shift;
pub mod status;

use crate::config::Config;
use crate::core::ports::SystemClock;
use crate::core::tracker::AttendanceTracker;
use crate::db::notifier::TableNotifier;
use crate::db::store::SqliteLogStore;
use crate::errors::AppResult;

pub type CliTracker = AttendanceTracker<SystemClock, SqliteLogStore, TableNotifier>;

/// Wire the tracker up with the SQLite-backed ports.
pub(crate) fn open_tracker(cfg: &Config) -> AppResult<CliTracker> {
    Ok(AttendanceTracker::new(
        SystemClock,
        SqliteLogStore::open(&cfg.database)?,
        TableNotifier::open(&cfg.database)?,
        cfg.policy(),
        cfg.horizon_days,
    ))
}
