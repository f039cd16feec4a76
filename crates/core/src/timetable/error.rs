use chrono::NaiveDateTime;
use thiserror::Error;

/// Errors found while validating a timetable day before reconciliation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimetableError {
    #[error("School day ends ({end}) before it starts ({start})")]
    InvalidSchoolDay {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    #[error("Period starting at {start} ends before it starts")]
    InvalidPeriod { start: NaiveDateTime },
    #[error("Period starting at {start} falls outside the school day")]
    PeriodOutsideSchoolDay { start: NaiveDateTime },
    #[error("Period starting at {start} is out of order")]
    PeriodsOutOfOrder { start: NaiveDateTime },
    #[error("Event {event_id} ends before it starts")]
    InvalidEvent { event_id: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_timetable_error_display() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 4)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();

        assert_eq!(
            TimetableError::InvalidEvent { event_id: 42 }.to_string(),
            "Event 42 ends before it starts"
        );
        assert_eq!(
            TimetableError::PeriodsOutOfOrder { start }.to_string(),
            "Period starting at 2024-03-04 09:00:00 is out of order"
        );
    }
}
