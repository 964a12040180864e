//! Table-backed `NotificationPort`. The CLI has no OS push transport;
//! scheduled reminders live as rows in the `reminders` table, and the
//! row id doubles as the cancellation handle.

use crate::core::ports::{NotificationPort, ReminderPayload};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::{DateTime, Local};
use rusqlite::params;

pub struct TableNotifier {
    pool: DbPool,
}

impl TableNotifier {
    pub fn open(path: &str) -> AppResult<Self> {
        Ok(Self {
            pool: DbPool::new(path)?,
        })
    }
}

impl NotificationPort for TableNotifier {
    fn schedule(&mut self, at: DateTime<Local>, payload: &ReminderPayload) -> AppResult<i64> {
        self.pool.conn.execute(
            "INSERT INTO reminders (owner, kind, trigger_at, message) VALUES (?1, ?2, ?3, ?4)",
            params![
                payload.owner,
                payload.kind.rk_as_str(),
                at.to_rfc3339(),
                payload.message,
            ],
        )?;
        Ok(self.pool.conn.last_insert_rowid())
    }

    fn cancel(&mut self, id: i64) -> AppResult<()> {
        // cancelling an id that already fired or was pruned is a no-op
        self.pool
            .conn
            .execute("DELETE FROM reminders WHERE id = ?1", params![id])?;
        Ok(())
    }
}
