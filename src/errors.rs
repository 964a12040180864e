//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use crate::models::day_status::DayState;
use crate::models::event_kind::EventKind;
use crate::models::shift::FieldError;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid event kind: {0}")]
    InvalidEventKind(String),

    #[error("Invalid weekday tag: {0}")]
    InvalidWeekday(String),

    // ---------------------------
    // Shift definition errors
    // ---------------------------
    // All violated time-relationship rules are collected and reported
    // together, one line per field.
    #[error("Invalid shift definition:\n{}", format_field_errors(.0))]
    ShiftDefinition(Vec<FieldError>),

    #[error("Unknown shift: {0}")]
    UnknownShift(String),

    #[error("Unknown note: {0}")]
    UnknownNote(i64),

    // ---------------------------
    // State machine errors
    // ---------------------------
    #[error("Invalid transition: event '{event}' not allowed in state '{state}'")]
    InvalidTransition { state: DayState, event: EventKind },

    // ---------------------------
    // Reminder scheduling errors
    // ---------------------------
    #[error("Scheduling error: {0}")]
    Scheduling(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

fn format_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("  - {e}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub type AppResult<T> = Result<T, AppError>;
