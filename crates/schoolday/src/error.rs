//! Shell error types.

use schoolday_core::timetable::TimetableError;
use thiserror::Error;

/// Result type alias for the shell crate.
pub type Result<T> = std::result::Result<T, AppError>;

/// Errors that can occur while loading input or driving the pipeline.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid timetable: {0}")]
    Timetable(#[from] TimetableError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Debounce task stopped")]
    DebounceClosed,

    #[error("Debounce task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
