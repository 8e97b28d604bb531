use crate::export::OutputFormat;
use crate::stats::Granularity;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rWrapped
/// CLI application to explore a personal listening history stored in SQLite
#[derive(Parser)]
#[command(
    name = "rwrapped",
    version = env!("CARGO_PKG_VERSION"),
    about = "Explore your listening history with SQLite: query tables and hours played per month",
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

    /// Database maintenance
    Db {
        #[arg(long = "info", help = "Show database information")]
        info: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Import listening-history JSON files into the history table
    Import {
        /// JSON files (arrays of {endTime, artistName, trackName, msPlayed})
        #[arg(required = true, value_name = "FILE")]
        files: Vec<String>,
    },

    /// Run a query and show the first rows as a table
    Show {
        /// SQL query returning rows
        sql: String,

        /// Number of rows to display (default from config)
        #[arg(long, short = 'n')]
        rows: Option<usize>,

        /// Write the table as HTML to FILE instead of printing it
        #[arg(long, value_name = "FILE")]
        html: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Hours played by an artist per month (or weekday/hour) of a year
    Hours {
        /// Exact artist name
        artist: String,

        /// Year to aggregate (default from config)
        #[arg(long, short = 'y')]
        year: Option<i32>,

        /// Bucket granularity (default from config)
        #[arg(long = "by", value_enum)]
        by: Option<Granularity>,

        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,

        /// Write the output to FILE instead of stdout
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
