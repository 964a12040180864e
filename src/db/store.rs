//! `SqliteLogStore`, the SQLite-backed implementation of the core
//! `LogStore` port over the `logs` table.

use crate::core::ports::LogStore;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::event_kind::EventKind;
use crate::models::log_entry::LogEntry;
use crate::utils::date::day_key;
use chrono::{DateTime, Local, NaiveDate};
use rusqlite::params;

pub struct SqliteLogStore {
    pool: DbPool,
}

impl SqliteLogStore {
    pub fn open(path: &str) -> AppResult<Self> {
        Ok(Self {
            pool: DbPool::new(path)?,
        })
    }

    pub fn from_pool(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl LogStore for SqliteLogStore {
    fn append(&mut self, entry: &LogEntry) -> AppResult<i64> {
        self.pool.conn.execute(
            "INSERT INTO logs (day, shift_id, kind, timestamp) VALUES (?1, ?2, ?3, ?4)",
            params![
                entry.day_key(),
                entry.shift_id,
                entry.kind.to_db_str(),
                entry.timestamp.to_rfc3339(),
            ],
        )?;
        Ok(self.pool.conn.last_insert_rowid())
    }

    fn entries_for(&self, day: NaiveDate) -> AppResult<Vec<LogEntry>> {
        let mut stmt = self.pool.conn.prepare_cached(
            "SELECT id, shift_id, kind, timestamp FROM logs WHERE day = ?1 ORDER BY id ASC",
        )?;
        let rows = stmt.query_map(params![day_key(day)], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
            ))
        })?;

        let mut out = Vec::new();
        for row in rows {
            let (id, shift_id, kind_raw, ts_raw) = row?;
            let kind = EventKind::from_db_str(&kind_raw)
                .ok_or_else(|| AppError::InvalidEventKind(kind_raw))?;
            let timestamp = DateTime::parse_from_rfc3339(&ts_raw)
                .map_err(|_| AppError::InvalidDate(ts_raw))?
                .with_timezone(&Local);
            out.push(LogEntry {
                id,
                shift_id,
                kind,
                timestamp,
            });
        }
        Ok(out)
    }

    fn delete_day(&mut self, day: NaiveDate) -> AppResult<usize> {
        let n = self
            .pool
            .conn
            .execute("DELETE FROM logs WHERE day = ?1", params![day_key(day)])?;
        Ok(n)
    }
}
