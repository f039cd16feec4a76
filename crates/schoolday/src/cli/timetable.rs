//! Timetable CLI command.

use std::path::PathBuf;

use clap::Parser;

/// Reconcile a timetable day.
#[derive(Debug, Parser)]
pub struct TimetableCommand {
    /// Timetable day JSON file. Reads stdin when omitted.
    #[arg(long, short)]
    pub input: Option<PathBuf>,
}
