use clap::{Parser, Subcommand};

/// Command-line interface definition for shiftlog
/// CLI application to track shift attendance with SQLite
#[derive(Parser)]
#[command(
    name = "shiftlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A shift attendance CLI: record daily work events, validate them against shift windows, and compute reminders",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration values for inconsistencies")]
        check: bool,
    },

    /// Manage shift definitions
    Shift {
        #[arg(long = "add", value_name = "NAME", help = "Create a new shift")]
        add: Option<String>,

        #[arg(long = "departure", value_name = "HH:MM", help = "Leave-home time")]
        departure: Option<String>,

        #[arg(long = "start", value_name = "HH:MM", help = "Shift start time")]
        start: Option<String>,

        #[arg(long = "office-end", value_name = "HH:MM", help = "Regular office end time")]
        office_end: Option<String>,

        #[arg(long = "end", value_name = "HH:MM", help = "Shift end time (incl. overtime)")]
        end: Option<String>,

        #[arg(
            long = "days",
            value_name = "Mon,Tue,...",
            help = "Weekdays the shift applies to"
        )]
        days: Option<String>,

        #[arg(
            long = "remind-before",
            value_name = "MIN",
            help = "Minutes before start to remind (0 disables)"
        )]
        remind_before: Option<i32>,

        #[arg(
            long = "remind-after",
            value_name = "MIN",
            help = "Minutes before end to remind (0 disables)"
        )]
        remind_after: Option<i32>,

        #[arg(long = "break", value_name = "MIN", help = "Break minutes inside the shift")]
        break_minutes: Option<i32>,

        #[arg(long = "list", help = "List all shifts")]
        list: bool,

        #[arg(long = "del", value_name = "ID", help = "Delete a shift and its reminders")]
        del: Option<String>,
    },

    /// Manage reminder notes
    Note {
        #[arg(long = "add", value_name = "TEXT", help = "Create a new note")]
        add: Option<String>,

        #[arg(long = "at", value_name = "HH:MM", help = "Reminder time of day")]
        at: Option<String>,

        #[arg(
            long = "shifts",
            value_name = "ID,ID,...",
            help = "Associate the note with shifts (mutually exclusive with --days)"
        )]
        shifts: Option<String>,

        #[arg(
            long = "days",
            value_name = "Mon,Tue,...",
            help = "Explicit weekday tags (mutually exclusive with --shifts)"
        )]
        days: Option<String>,

        #[arg(long = "list", help = "List all notes")]
        list: bool,

        #[arg(long = "del", value_name = "ID", help = "Delete a note and its reminders")]
        del: Option<i64>,
    },

    /// Record an attendance event for today
    Record {
        /// Event kind: go-work | check-in | punch | check-out | complete
        event: String,

        #[arg(long = "shift", value_name = "ID", help = "Shift the event belongs to")]
        shift: Option<String>,

        #[arg(
            long = "at",
            value_name = "YYYY-MM-DD HH:MM",
            help = "Explicit timestamp instead of now"
        )]
        at: Option<String>,
    },

    /// Show a day's work status
    Status {
        /// Date (YYYY-MM-DD), defaults to today
        date: Option<String>,

        #[arg(long = "json", help = "Print the status as JSON")]
        json: bool,
    },

    /// Delete a day's logs and status, resyncing the shift's reminders
    Reset {
        /// Date to reset (YYYY-MM-DD)
        date: String,

        #[arg(long = "shift", value_name = "ID", help = "Shift whose reminders to resync")]
        shift: Option<String>,
    },

    /// Classify a finished day against its shift
    Classify {
        /// Date (YYYY-MM-DD)
        date: String,

        #[arg(long = "shift", value_name = "ID")]
        shift: String,
    },

    /// List upcoming reminder triggers
    Reminders {
        #[arg(
            long = "from",
            value_name = "YYYY-MM-DD HH:MM",
            help = "Evaluation instant, defaults to now"
        )]
        from: Option<String>,

        #[arg(long = "days", value_name = "N", help = "Horizon in days (default from config)")]
        days: Option<u64>,

        #[arg(long = "shift", value_name = "ID", help = "Limit to one shift")]
        shift: Option<String>,

        #[arg(long = "note", value_name = "ID", help = "Limit to one note")]
        note: Option<i64>,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
