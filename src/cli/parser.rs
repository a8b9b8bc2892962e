use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for Togather
/// Small-group roster, gatherings and swipe-style attendance on SQLite
#[derive(Parser)]
#[command(
    name = "togather",
    version = env!("CARGO_PKG_VERSION"),
    about = "Manage a small group: member roster, gatherings and attendance using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Act as this user instead of the configured one
    #[arg(global = true, long = "user")]
    pub user: Option<String>,

    /// Act with this role instead of the configured one (admin|leader|member)
    #[arg(global = true, long = "role")]
    pub role: Option<String>,

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

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage the member roster
    Member {
        #[command(subcommand)]
        action: MemberAction,
    },

    /// Manage scheduled gatherings
    Event {
        #[command(subcommand)]
        action: EventAction,
    },

    /// Record a single attendance status
    Mark {
        /// Event id
        event: i64,

        /// Member id
        member: i64,

        /// present | absent (p/a also accepted)
        status: String,
    },

    /// Walk the roster one member at a time, reading gestures from stdin
    ///
    /// Keys: p = present, a = absent, u = undo, r = reset, q = quit
    Swipe {
        /// Event id
        event: i64,
    },

    /// Show stored attendance for an event
    Tally {
        /// Event id
        event: i64,
    },

    /// Attendance streaks, life stages and upcoming birthdays
    Insights {
        #[arg(long = "as-of", value_name = "DATE", help = "Reference date (YYYY-MM-DD), default today")]
        as_of: Option<String>,

        #[arg(long = "days", help = "Birthday look-ahead window in days")]
        days: Option<u32>,
    },

    /// Export the attendance of an event
    Export {
        #[arg(long = "event", help = "Event id")]
        event: i64,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum MemberAction {
    /// Add a member to the roster
    Add {
        name: String,

        #[arg(long = "avatar", help = "Avatar URL or file reference")]
        avatar: Option<String>,

        #[arg(long = "birth", value_name = "DATE", help = "Birth date (YYYY-MM-DD)")]
        birth: Option<String>,
    },

    /// List active members
    List,

    /// Remove a member from the roster (history is kept)
    Del { id: i64 },
}

#[derive(Subcommand)]
pub enum EventAction {
    /// Schedule a gathering
    Add {
        title: String,

        /// Date of the gathering (YYYY-MM-DD)
        date: String,

        #[arg(long = "time", help = "Start time (HH:MM)")]
        time: Option<String>,

        #[arg(long = "location", help = "Where the group meets")]
        location: Option<String>,
    },

    /// List gatherings
    List {
        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a FROM:TO range (default: current month)"
        )]
        period: Option<String>,
    },
}
