use super::error::TimetableError;
use super::reconcile::reconcile;
use super::types::{DayTimetable, TimetableDay};

/// Validates a timetable day before it is reconciled.
///
/// Checks that the school day and every period / event has a non-negative
/// duration, that periods start within the school day, and that periods are
/// ascending by start time.
pub fn validate_day(day: &TimetableDay) -> Result<(), TimetableError> {
    if day.school_day_end < day.school_day_start {
        return Err(TimetableError::InvalidSchoolDay {
            start: day.school_day_start,
            end: day.school_day_end,
        });
    }

    for period in &day.periods {
        if period.end_time < period.start_time {
            return Err(TimetableError::InvalidPeriod {
                start: period.start_time,
            });
        }
        if period.start_time < day.school_day_start || period.start_time > day.school_day_end {
            return Err(TimetableError::PeriodOutsideSchoolDay {
                start: period.start_time,
            });
        }
    }

    if let Some(pair) = day
        .periods
        .windows(2)
        .find(|pair| pair[1].start_time < pair[0].start_time)
    {
        return Err(TimetableError::PeriodsOutOfOrder {
            start: pair[1].start_time,
        });
    }

    if let Some(event) = day.events.iter().find(|e| e.end_time < e.start_time) {
        return Err(TimetableError::InvalidEvent {
            event_id: event.event_id,
        });
    }

    Ok(())
}

/// Builds what should be rendered for a day.
///
/// Holidays and staff days skip reconciliation entirely and render a
/// placeholder. School days are validated and then reconciled.
pub fn build_day_timetable(day: &TimetableDay) -> Result<DayTimetable, TimetableError> {
    if !day.day_type.is_school_day() {
        return Ok(DayTimetable::NonSchoolDay {
            day_type: day.day_type,
        });
    }

    validate_day(day)?;

    Ok(DayTimetable::Reconciled(reconcile(
        &day.periods,
        &day.events,
        day.school_day_start,
        day.school_day_end,
    )))
}
