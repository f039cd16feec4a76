//! schoolday_core - the functional core of schoolday.
//!
//! Everything in this crate is pure: no I/O, no clocks, no logging. Callers
//! (the `schoolday` shell crate) own scheduling, debouncing and output.

pub mod recurrence;
pub mod serde;
pub mod timetable;
