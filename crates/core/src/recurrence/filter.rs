//! Derivation of the free-room recurrence filter from event form state.

use chrono::NaiveTime;

use super::types::{RecurrenceDraft, RecurrenceFilter};

/// Start time used for all-day events when looking up free rooms.
pub const ALL_DAY_START_TIME: NaiveTime = match NaiveTime::from_hms_opt(9, 0, 0) {
    Some(time) => time,
    None => panic!("invalid all-day start time"),
};

/// End time used for all-day events when looking up free rooms.
pub const ALL_DAY_END_TIME: NaiveTime = match NaiveTime::from_hms_opt(17, 0, 0) {
    Some(time) => time,
    None => panic!("invalid all-day end time"),
};

/// Parses the occurrences text field. Only positive whole numbers count.
pub fn parse_occurrences(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|n| *n > 0)
}

/// Derives the recurrence filter for a draft event.
///
/// Returns `None` while the draft is not ready: start date, start time or end
/// time missing, no recurrence chosen, or a recurring event with neither an
/// end date nor a positive occurrence count. `None` is not an error; the
/// consumer simply does not run its query.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use schoolday_core::recurrence::{derive_recurrence_filter, RecurrenceDraft, RecurrenceType};
///
/// let draft = RecurrenceDraft::new(
///     NaiveDate::from_ymd_opt(2024, 5, 6).unwrap(),
///     NaiveTime::from_hms_opt(10, 15, 0).unwrap(),
///     NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
/// )
/// .with_recurrence(RecurrenceType::Weekly)
/// .with_occurrences("5");
///
/// let filter = derive_recurrence_filter(&draft).unwrap();
/// assert_eq!(filter.occurrences, Some(5));
/// assert_eq!(filter.end_date, None);
/// ```
pub fn derive_recurrence_filter(draft: &RecurrenceDraft) -> Option<RecurrenceFilter> {
    let from_date = draft.start_date?;
    let start_time = draft.start_time?;
    let end_time = draft.end_time?;
    let recurrence = draft.recurrence?;

    let (start_time, end_time) = if draft.all_day_event {
        (ALL_DAY_START_TIME, ALL_DAY_END_TIME)
    } else {
        (start_time, end_time)
    };

    let base = RecurrenceFilter {
        recurrence,
        from_date,
        start_time,
        end_time,
        end_date: None,
        occurrences: None,
    };

    if !recurrence.is_recurring() {
        return Some(base);
    }

    if let Some(end_date) = draft.end_date {
        return Some(RecurrenceFilter {
            end_date: Some(end_date),
            ..base
        });
    }

    draft
        .occurrences
        .as_deref()
        .and_then(parse_occurrences)
        .map(|occurrences| RecurrenceFilter {
            occurrences: Some(occurrences),
            ..base
        })
}
