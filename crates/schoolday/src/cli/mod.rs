//! CLI command definitions.

pub mod recurrence;
pub mod timetable;

use clap::{Parser, Subcommand, ValueEnum};

/// Timetable reconciliation and recurring-event filter tooling.
#[derive(Debug, Parser)]
#[command(name = "schoolday")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format [env: SCHOOLDAY_FORMAT, default: pretty].
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Recurrence filter debounce in milliseconds [env: SCHOOLDAY_DEBOUNCE_MS, default: 300].
    #[arg(long, global = true)]
    pub debounce_ms: Option<u64>,

    /// Suppress non-essential output.
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Reconcile a day's periods with a party's events.
    Timetable(timetable::TimetableCommand),
    /// Derive the free-room recurrence filter for a draft event.
    Recurrence(recurrence::RecurrenceCommand),
    /// Stream draft events (one JSON object per line on stdin) and print
    /// each settled recurrence filter.
    WatchRecurrence,
}
