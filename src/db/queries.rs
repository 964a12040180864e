//! Row mapping and CRUD queries for shifts, notes and scheduled
//! reminders. Attendance log rows live behind `store::SqliteLogStore`.

use crate::errors::{AppError, AppResult};
use crate::models::note::Note;
use crate::models::shift::Shift;
use crate::utils::date::{format_days, parse_days};
use crate::utils::time::required_time;
use rusqlite::{Connection, OptionalExtension, Row, params};

const SHIFT_COLS: &str = "id, name, departure_time, start_time, office_end_time, end_time, \
                          days_applied, remind_before_start, remind_after_end, break_minutes, active";

/// Raw TEXT columns, read inside rusqlite's error space; time and
/// weekday parsing happens afterwards in `into_shift`.
struct ShiftRow {
    id: String,
    name: String,
    departure_time: String,
    start_time: String,
    office_end_time: String,
    end_time: String,
    days_applied: String,
    remind_before_start: i32,
    remind_after_end: i32,
    break_minutes: i32,
    active: bool,
}

fn read_shift(row: &Row<'_>) -> rusqlite::Result<ShiftRow> {
    Ok(ShiftRow {
        id: row.get(0)?,
        name: row.get(1)?,
        departure_time: row.get(2)?,
        start_time: row.get(3)?,
        office_end_time: row.get(4)?,
        end_time: row.get(5)?,
        days_applied: row.get(6)?,
        remind_before_start: row.get(7)?,
        remind_after_end: row.get(8)?,
        break_minutes: row.get(9)?,
        active: row.get::<_, i64>(10)? != 0,
    })
}

fn into_shift(raw: ShiftRow) -> AppResult<Shift> {
    Ok(Shift {
        departure_time: required_time(&raw.departure_time)?,
        start_time: required_time(&raw.start_time)?,
        office_end_time: required_time(&raw.office_end_time)?,
        end_time: required_time(&raw.end_time)?,
        days_applied: parse_days(&raw.days_applied)?,
        id: raw.id,
        name: raw.name,
        remind_before_start: raw.remind_before_start,
        remind_after_end: raw.remind_after_end,
        break_minutes: raw.break_minutes,
        active: raw.active,
    })
}

pub fn insert_shift(conn: &Connection, shift: &Shift) -> AppResult<()> {
    conn.execute(
        "INSERT INTO shifts (id, name, departure_time, start_time, office_end_time, end_time, \
         days_applied, remind_before_start, remind_after_end, break_minutes, active)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            shift.id,
            shift.name,
            shift.departure_time.format("%H:%M").to_string(),
            shift.start_time.format("%H:%M").to_string(),
            shift.office_end_time.format("%H:%M").to_string(),
            shift.end_time.format("%H:%M").to_string(),
            format_days(&shift.days_applied),
            shift.remind_before_start,
            shift.remind_after_end,
            shift.break_minutes,
            shift.active as i64,
        ],
    )?;
    Ok(())
}

pub fn get_shift(conn: &Connection, id: &str) -> AppResult<Shift> {
    let sql = format!("SELECT {SHIFT_COLS} FROM shifts WHERE id = ?1");
    let found = conn
        .prepare(&sql)?
        .query_row(params![id], read_shift)
        .optional()?;

    match found {
        Some(raw) => into_shift(raw),
        None => Err(AppError::UnknownShift(id.to_string())),
    }
}

pub fn list_shifts(conn: &Connection) -> AppResult<Vec<Shift>> {
    let sql = format!("SELECT {SHIFT_COLS} FROM shifts ORDER BY name ASC");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], read_shift)?;

    let mut out = Vec::new();
    for row in rows {
        out.push(into_shift(row?)?);
    }
    Ok(out)
}

pub fn delete_shift(conn: &Connection, id: &str) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM shifts WHERE id = ?1", params![id])?;
    if n == 0 {
        return Err(AppError::UnknownShift(id.to_string()));
    }
    Ok(n)
}

// ---------------------------------------------------------------
// Notes
// ---------------------------------------------------------------

fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn insert_note(conn: &Connection, note: &Note) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO notes (text, reminder_time, shift_ids, days_applied)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            note.text,
            note.reminder_time.format("%H:%M").to_string(),
            note.shift_ids.join(","),
            format_days(&note.days_applied),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_note(conn: &Connection, id: i64) -> AppResult<Note> {
    let found = conn
        .prepare("SELECT id, text, reminder_time, shift_ids, days_applied FROM notes WHERE id = ?1")?
        .query_row(params![id], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
            ))
        })
        .optional()?;

    match found {
        Some((id, text, time_raw, shifts_raw, days_raw)) => Ok(Note {
            id,
            text,
            reminder_time: required_time(&time_raw)?,
            shift_ids: split_csv(&shifts_raw),
            days_applied: parse_days(&days_raw)?,
        }),
        None => Err(AppError::UnknownNote(id)),
    }
}

pub fn list_notes(conn: &Connection) -> AppResult<Vec<Note>> {
    let mut stmt =
        conn.prepare("SELECT id, text, reminder_time, shift_ids, days_applied FROM notes ORDER BY id ASC")?;
    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, String>(3)?,
            row.get::<_, String>(4)?,
        ))
    })?;

    let mut out = Vec::new();
    for row in rows {
        let (id, text, time_raw, shifts_raw, days_raw) = row?;
        out.push(Note {
            id,
            text,
            reminder_time: required_time(&time_raw)?,
            shift_ids: split_csv(&shifts_raw),
            days_applied: parse_days(&days_raw)?,
        });
    }
    Ok(out)
}

pub fn delete_note(conn: &Connection, id: i64) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM notes WHERE id = ?1", params![id])?;
    if n == 0 {
        return Err(AppError::UnknownNote(id));
    }
    Ok(n)
}

// ---------------------------------------------------------------
// Scheduled reminders (issued-id bookkeeping across CLI runs)
// ---------------------------------------------------------------

pub fn reminder_ids_for_owner(conn: &Connection, owner: &str) -> AppResult<Vec<i64>> {
    let mut stmt = conn.prepare("SELECT id FROM reminders WHERE owner = ?1 ORDER BY id ASC")?;
    let rows = stmt.query_map(params![owner], |row| row.get::<_, i64>(0))?;

    let mut ids = Vec::new();
    for id in rows {
        ids.push(id?);
    }
    Ok(ids)
}
