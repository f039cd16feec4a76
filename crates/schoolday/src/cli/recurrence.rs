//! Recurrence CLI command.

use std::path::PathBuf;

use clap::Parser;

/// Derive a recurrence filter once.
#[derive(Debug, Parser)]
pub struct RecurrenceCommand {
    /// Draft event JSON file. Reads stdin when omitted.
    #[arg(long, short)]
    pub input: Option<PathBuf>,
}
