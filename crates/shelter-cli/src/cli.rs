//! CLI argument definitions for the shelter normalizer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "shelter-normalizer",
    version,
    about = "Normalize animal shelter outcome records into a relational schema",
    long_about = "Normalize a flat animal shelter CSV export into lookup tables,\n\
                  Animals and Shelter, and load them into a SQLite database\n\
                  in a single transaction."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize the input file and load it into the database.
    Load(LoadArgs),

    /// List the target tables and their columns.
    Tables,
}

#[derive(Parser)]
pub struct LoadArgs {
    /// Path to the shelter CSV export (default: ./origin_db/main_animals.csv).
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// SQLite database file to write (default: ./animals.db).
    #[arg(long = "database", value_name = "PATH")]
    pub database: Option<PathBuf>,

    /// Config file (default: ./shelter-normalizer.toml when present).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// How Animals rows are deduplicated.
    ///
    /// `by-value` collapses only rows identical in every attribute and
    /// matches the legacy loader; animals sharing an id but differing
    /// elsewhere then fail the load on the unique id constraint.
    #[arg(long = "dedupe-animals", value_enum)]
    pub dedupe_animals: Option<DedupeArg>,

    /// Store names as read instead of doubling single quotes.
    #[arg(long = "no-escape-names")]
    pub no_escape_names: bool,

    /// Delete existing rows before loading (same transaction).
    #[arg(long = "replace")]
    pub replace: bool,

    /// Normalize and report without touching the database.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Write a JSON run report to this path.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DedupeArg {
    ById,
    ByValue,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
