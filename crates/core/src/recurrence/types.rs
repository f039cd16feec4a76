use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::serde::{
    deserialize_lenient, deserialize_lenient_bool, deserialize_lenient_date,
    deserialize_lenient_time, deserialize_numeric_text, serialize_date, serialize_optional_date, serialize_time,
};

/// How an event repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecurrenceType {
    NoRecurrence,
    Daily,
    Weekly,
    Fortnightly,
    Monthly,
}

impl RecurrenceType {
    /// Returns true for every type except `NoRecurrence`.
    pub fn is_recurring(&self) -> bool {
        !matches!(self, RecurrenceType::NoRecurrence)
    }
}

/// The recurrence-related fields of the event-creation form.
///
/// Fields that are empty or cannot be parsed deserialize as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceDraft {
    #[serde(default, deserialize_with = "deserialize_lenient_bool")]
    pub all_day_event: bool,
    #[serde(default, deserialize_with = "deserialize_lenient_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_lenient_time")]
    pub start_time: Option<NaiveTime>,
    #[serde(default, deserialize_with = "deserialize_lenient_time")]
    pub end_time: Option<NaiveTime>,
    #[serde(
        default,
        rename = "recurrenceEnum",
        deserialize_with = "deserialize_lenient"
    )]
    pub recurrence: Option<RecurrenceType>,
    #[serde(default, deserialize_with = "deserialize_numeric_text")]
    pub occurrences: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_date")]
    pub end_date: Option<NaiveDate>,
}

impl RecurrenceDraft {
    /// Creates a one-off timed draft.
    pub fn new(start_date: NaiveDate, start_time: NaiveTime, end_time: NaiveTime) -> Self {
        Self {
            start_date: Some(start_date),
            start_time: Some(start_time),
            end_time: Some(end_time),
            recurrence: Some(RecurrenceType::NoRecurrence),
            ..Self::default()
        }
    }

    /// Sets the recurrence type.
    pub fn with_recurrence(mut self, recurrence: RecurrenceType) -> Self {
        self.recurrence = Some(recurrence);
        self
    }

    /// Sets the raw occurrences field.
    pub fn with_occurrences(mut self, occurrences: impl Into<String>) -> Self {
        self.occurrences = Some(occurrences.into());
        self
    }

    /// Sets the recurrence end date.
    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Marks the draft as an all-day event.
    pub fn all_day(mut self) -> Self {
        self.all_day_event = true;
        self
    }
}

/// The normalized recurrence query sent with a free-room lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceFilter {
    pub recurrence: RecurrenceType,
    #[serde(serialize_with = "serialize_date")]
    pub from_date: NaiveDate,
    #[serde(serialize_with = "serialize_time")]
    pub start_time: NaiveTime,
    #[serde(serialize_with = "serialize_time")]
    pub end_time: NaiveTime,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_optional_date"
    )]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurrences: Option<u32>,
}
