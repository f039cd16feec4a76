//! Command implementations shared by the binary and the integration tests.

use std::path::Path;

use schoolday_core::recurrence::{derive_recurrence_filter, RecurrenceDraft, RecurrenceFilter};
use schoolday_core::timetable::{build_day_timetable, DayTimetable, TimetableDay};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};
use tokio_stream::wrappers::LinesStream;
use tokio_stream::StreamExt;

use crate::config::Config;
use crate::error::Result;
use crate::pipeline::RecurrenceFilterPipeline;

/// Reads a file, or all of stdin when no path is given.
pub async fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => Ok(tokio::fs::read_to_string(path).await?),
        None => {
            let mut buffer = String::new();
            tokio::io::stdin().read_to_string(&mut buffer).await?;
            Ok(buffer)
        }
    }
}

/// Parses and reconciles a timetable day.
pub fn run_timetable(raw: &str) -> Result<(TimetableDay, DayTimetable)> {
    let day: TimetableDay = serde_json::from_str(raw)?;
    let timetable = build_day_timetable(&day)?;

    match &timetable {
        DayTimetable::NonSchoolDay { day_type } => {
            tracing::info!(date = %day.date, ?day_type, "non-school day, skipping reconciliation");
        }
        DayTimetable::Reconciled(reconciled) => {
            tracing::debug!(
                date = %day.date,
                periods = day.periods.len(),
                events = day.events.len(),
                slots = reconciled.len(),
                before_school = reconciled.number_of_events_before_school,
                after_school = reconciled.number_of_events_after_school,
                "reconciled timetable"
            );
        }
    }

    Ok((day, timetable))
}

/// Parses a draft and derives its recurrence filter once.
pub fn run_recurrence(raw: &str) -> Result<Option<RecurrenceFilter>> {
    let draft: RecurrenceDraft = serde_json::from_str(raw)?;
    let filter = derive_recurrence_filter(&draft);
    tracing::debug!(ready = filter.is_some(), "derived recurrence filter");
    Ok(filter)
}

/// Streams newline-delimited drafts through the debounce pipeline.
///
/// `emit` is called for every settled filter that differs from the previous
/// one. Malformed lines are logged and skipped. At end of input the pending
/// draft, if any, is settled immediately.
pub async fn watch_recurrence<R, F>(reader: R, config: &Config, mut emit: F) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    F: FnMut(Option<RecurrenceFilter>),
{
    let mut pipeline = RecurrenceFilterPipeline::from_config(config);
    let mut settled = pipeline.subscribe();
    let mut lines = LinesStream::new(reader.lines());

    tracing::info!(debounce_ms = config.debounce_ms, "watching recurrence drafts");

    loop {
        tokio::select! {
            line = lines.next() => match line {
                Some(line) => {
                    let line = line?;
                    if line.trim().is_empty() {
                        continue;
                    }
                    match serde_json::from_str::<RecurrenceDraft>(&line) {
                        Ok(draft) => pipeline.update(&draft)?,
                        Err(error) => tracing::warn!(%error, "skipping malformed draft"),
                    }
                }
                None => break,
            },
            changed = settled.changed() => {
                if changed.is_err() {
                    break;
                }
                emit(settled.borrow_and_update().clone());
            }
        }
    }

    pipeline.finish().await?;

    let last = settled.borrow_and_update();
    if last.has_changed() {
        emit(last.clone());
    }

    Ok(())
}
