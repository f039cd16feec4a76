mod filter;
mod types;

pub use filter::{derive_recurrence_filter, parse_occurrences, ALL_DAY_END_TIME, ALL_DAY_START_TIME};
pub use types::{RecurrenceDraft, RecurrenceFilter, RecurrenceType};
