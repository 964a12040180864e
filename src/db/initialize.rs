use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the full schema. Every statement is idempotent so `init` can
/// be re-run safely on an existing database.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS shifts (
            id                  TEXT PRIMARY KEY,
            name                TEXT NOT NULL,
            departure_time      TEXT NOT NULL,
            start_time          TEXT NOT NULL,
            office_end_time     TEXT NOT NULL,
            end_time            TEXT NOT NULL,
            days_applied        TEXT NOT NULL DEFAULT '',
            remind_before_start INTEGER NOT NULL DEFAULT 0,
            remind_after_end    INTEGER NOT NULL DEFAULT 0,
            break_minutes       INTEGER NOT NULL DEFAULT 0,
            active              INTEGER NOT NULL DEFAULT 1
        );

        CREATE TABLE IF NOT EXISTS logs (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            day       TEXT NOT NULL,
            shift_id  TEXT NOT NULL,
            kind      TEXT NOT NULL
                      CHECK(kind IN ('go_work','check_in','punch','check_out','complete')),
            timestamp TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_logs_day ON logs(day);

        CREATE TABLE IF NOT EXISTS notes (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            text          TEXT NOT NULL,
            reminder_time TEXT NOT NULL,
            shift_ids     TEXT NOT NULL DEFAULT '',
            days_applied  TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS reminders (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            owner      TEXT NOT NULL,
            kind       TEXT NOT NULL,
            trigger_at TEXT NOT NULL,
            message    TEXT NOT NULL DEFAULT ''
        );
        CREATE INDEX IF NOT EXISTS idx_reminders_owner ON reminders(owner);

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}
