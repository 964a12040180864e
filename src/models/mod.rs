pub mod classification;
pub mod day_status;
pub mod event_kind;
pub mod log_entry;
pub mod note;
pub mod shift;
