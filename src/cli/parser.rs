use crate::models::{ProjectStatus, Theme, TimeFormat};
use clap::{Parser, Subcommand};

/// Command-line interface definition for ThinkTimer.
/// Every data-returning command prints JSON on stdout.
#[derive(Parser)]
#[command(
    name = "thinktimer",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track time spent on projects: projects, time blocks and settings in SQLite",
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

    /// Print the effective configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Manage the database (migrations, integrity checks, info)
    Db {
        #[arg(long = "migrate", help = "Run pending schema migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create, list, edit and delete projects
    Project {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// Record, query, edit and stop time blocks
    Block {
        #[command(subcommand)]
        action: BlockAction,
    },

    /// Show or change user settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },

    /// Open a directory or URL with the platform default handler
    Open {
        #[command(subcommand)]
        target: OpenTarget,
    },
}

#[derive(Subcommand)]
pub enum ProjectAction {
    /// Create a project
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        discord: Option<String>,
        #[arg(long)]
        directory: Option<String>,
        /// Deadline (RFC 3339 timestamp or YYYY-MM-DD)
        #[arg(long)]
        deadline: Option<String>,
    },

    /// List all projects, newest first
    List,

    /// Show one project
    Show { id: i64 },

    /// Update only the given fields of a project
    Edit {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        discord: Option<String>,
        #[arg(long)]
        directory: Option<String>,
        #[arg(long)]
        deadline: Option<String>,
        #[arg(long, value_enum)]
        status: Option<ProjectStatus>,
    },

    /// Delete a project and all of its time blocks
    Del { id: i64 },
}

#[derive(Subcommand)]
pub enum BlockAction {
    /// Record a time block (omit --end to start a running timer)
    Add {
        #[arg(long = "project")]
        project_id: i64,
        /// Start (RFC 3339 timestamp or YYYY-MM-DD)
        #[arg(long)]
        start: String,
        #[arg(long)]
        end: Option<String>,
        /// Duration in seconds (derived from start/end when omitted)
        #[arg(long)]
        duration: Option<i64>,
        /// Duration was entered by hand
        #[arg(long)]
        manual: bool,
        #[arg(long)]
        description: Option<String>,
    },

    /// Show one time block
    Show { id: i64 },

    /// Time blocks started on a local calendar day
    Day {
        /// YYYY-MM-DD or RFC 3339 timestamp
        date: String,
    },

    /// Time blocks started between two instants (both inclusive)
    Range { start: String, end: String },

    /// Update only the given fields of a time block
    Edit {
        id: i64,
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
        #[arg(long)]
        duration: Option<i64>,
        #[arg(long)]
        description: Option<String>,
    },

    /// Stop a running block (with --duration: use that total in seconds)
    Stop {
        id: i64,
        #[arg(long)]
        duration: Option<i64>,
    },

    /// Delete a time block
    Del { id: i64 },

    /// Total recorded seconds for a project
    Total {
        #[arg(value_name = "PROJECT_ID")]
        project_id: i64,
    },
}

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Print the settings
    Show,

    /// Update only the given settings
    Set {
        #[arg(long, value_enum)]
        theme: Option<Theme>,
        #[arg(long)]
        language: Option<String>,
        #[arg(long = "time-format", value_enum)]
        time_format: Option<TimeFormat>,
        #[arg(long = "custom-url")]
        custom_url: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum OpenTarget {
    /// Open a directory in the file explorer
    Dir { path: String },

    /// Open a URL (custom protocols included)
    Url { url: String },
}
