//! Form state in, debounced recurrence filter out.
//!
//! Every keystroke re-derives the filter (memoized on the draft), but the
//! free-room lookup only sees values that survive the debounce interval.

use std::time::Duration;

use schoolday_core::recurrence::{derive_recurrence_filter, RecurrenceDraft, RecurrenceFilter};
use tokio::sync::watch;

use crate::config::Config;
use crate::error::Result;
use crate::reactive::{Debouncer, Memo};

/// Derives and debounces the recurrence filter for an event being drafted.
///
/// A settled `None` means the draft is incomplete and the dependent query
/// should stay disabled.
#[derive(Debug)]
pub struct RecurrenceFilterPipeline {
    memo: Memo<RecurrenceDraft, Option<RecurrenceFilter>>,
    debouncer: Debouncer<Option<RecurrenceFilter>>,
}

impl RecurrenceFilterPipeline {
    /// Creates a pipeline with the given debounce interval.
    pub fn new(debounce: Duration) -> Self {
        Self {
            memo: Memo::new(),
            debouncer: Debouncer::new(debounce, None),
        }
    }

    /// Creates a pipeline using the configured debounce interval.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.debounce())
    }

    /// Feeds the latest form state into the pipeline.
    pub fn update(&mut self, draft: &RecurrenceDraft) -> Result<()> {
        let filter = self.memo.get(draft, derive_recurrence_filter).clone();
        tracing::debug!(
            ready = filter.is_some(),
            recomputations = self.memo.recomputations(),
            "derived recurrence filter"
        );
        self.debouncer.push(filter)
    }

    /// Returns a receiver for settled filters.
    pub fn subscribe(&self) -> watch::Receiver<Option<RecurrenceFilter>> {
        self.debouncer.subscribe()
    }

    /// Returns the last settled filter.
    pub fn current(&self) -> Option<RecurrenceFilter> {
        self.debouncer.current()
    }

    /// Number of times the filter was actually re-derived.
    pub fn recomputations(&self) -> usize {
        self.memo.recomputations()
    }

    /// Settles any pending filter immediately and stops the debounce task.
    pub async fn finish(self) -> Result<()> {
        self.debouncer.finish().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use schoolday_core::recurrence::RecurrenceType;
    use tokio::time::{self, Instant};

    fn make_draft() -> RecurrenceDraft {
        RecurrenceDraft::new(
            NaiveDate::from_ymd_opt(2024, 5, 6).unwrap(),
            NaiveTime::from_hms_opt(10, 15, 0).unwrap(),
            NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_keystrokes_settle_to_last_filter() {
        let mut pipeline = RecurrenceFilterPipeline::new(Duration::from_millis(300));
        let mut settled = pipeline.subscribe();
        let weekly = make_draft().with_recurrence(RecurrenceType::Weekly);

        for typed in ["1", "12", "1", "10"] {
            pipeline
                .update(&weekly.clone().with_occurrences(typed))
                .unwrap();
            time::sleep(Duration::from_millis(50)).await;
        }
        let last_keystroke = Instant::now();

        settled.changed().await.unwrap();

        let filter = settled.borrow_and_update().clone().unwrap();
        assert_eq!(filter.occurrences, Some(10));
        assert!(last_keystroke.elapsed() >= Duration::from_millis(250));
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeated_draft_is_memoized() {
        let mut pipeline = RecurrenceFilterPipeline::new(Duration::from_millis(300));
        let draft = make_draft();

        pipeline.update(&draft).unwrap();
        pipeline.update(&draft).unwrap();
        pipeline.update(&draft.clone().all_day()).unwrap();

        assert_eq!(pipeline.recomputations(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_incomplete_draft_settles_to_none() {
        let mut pipeline = RecurrenceFilterPipeline::new(Duration::from_millis(300));

        pipeline.update(&make_draft()).unwrap();
        time::sleep(Duration::from_millis(400)).await;
        assert!(pipeline.current().is_some());

        pipeline
            .update(&make_draft().with_recurrence(RecurrenceType::Daily))
            .unwrap();
        time::sleep(Duration::from_millis(400)).await;
        assert_eq!(pipeline.current(), None);
    }
}
