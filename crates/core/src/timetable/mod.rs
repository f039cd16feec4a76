mod error;
mod operations;
mod reconcile;
mod types;

pub use error::TimetableError;
pub use operations::{build_day_timetable, validate_day};
pub use reconcile::{classify_event, reconcile, EventPlacement};
pub use types::{
    CalendarEvent, DayTimetable, DayType, MergedPeriodSlot, Period, PeriodType, ReconciledDay,
    TimetableDay,
};
