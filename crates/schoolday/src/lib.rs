//! schoolday - the imperative shell around `schoolday_core`.
//!
//! Owns timers, channels, file and stdin I/O, logging and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod reactive;

pub use config::Config;
pub use error::{AppError, Result};
pub use pipeline::RecurrenceFilterPipeline;
