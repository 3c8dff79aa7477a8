use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimebank
#[derive(Parser)]
#[command(
    name = "rtimebank",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record workday punches and keep a bank of hours using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the owner whose records are read and written
    #[arg(global = true, long = "owner")]
    pub owner: Option<String>,

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

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Add missing fields to the configuration file")]
        check: bool,

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

    /// Register a punch (entry, lunch-out, lunch-return, exit)
    Punch {
        /// Date of the punch (YYYY-MM-DD or "today", default today)
        date: Option<String>,

        #[arg(
            long = "kind",
            short = 'k',
            help = "Punch type: entry, lunch-out, lunch-return, exit (default: the next expected one)"
        )]
        kind: Option<String>,

        #[arg(long = "at", help = "Punch time (HH:MM, default: now)")]
        at: Option<String>,

        #[arg(long = "label", help = "Display text stored with the punch")]
        label: Option<String>,

        #[arg(long = "edit", help = "Replace an existing punch of the same type")]
        edit: bool,
    },

    /// Delete a punch or a whole day
    Del {
        /// Date of the record (YYYY-MM-DD)
        date: String,

        #[arg(long = "kind", short = 'k', help = "Delete only this punch type")]
        kind: Option<String>,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List days with status, worked hours and balance
    List {
        #[arg(long, short, help = "Filter by year/month/day, a custom range or 'all'")]
        period: Option<String>,
    },

    /// Show status, next action and live countdown for a day
    Status {
        /// Date (YYYY-MM-DD or "today", default today)
        date: Option<String>,

        #[arg(long = "at", help = "Evaluate the countdown at this time (HH:MM, default: now)")]
        at: Option<String>,
    },

    /// Show the bank of hours for a period
    Bank {
        #[arg(long, short, help = "Filter by year/month/day, a custom range or 'all'")]
        period: Option<String>,
    },

    /// Show worked-hours statistics for a period
    Stats {
        #[arg(long, short, help = "Filter by year/month/day, a custom range or 'all'")]
        period: Option<String>,

        #[arg(long = "monthly", help = "Break the statistics down by month")]
        monthly: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Export day results or raw punches
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range (default: all)"
        )]
        range: Option<String>,

        #[arg(long = "punches", help = "Export raw punches instead of day results")]
        punches: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
