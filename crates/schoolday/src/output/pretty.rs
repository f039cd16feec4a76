//! Pretty output formatting.

use chrono::NaiveDate;
use schoolday_core::recurrence::RecurrenceFilter;
use schoolday_core::timetable::{DayTimetable, MergedPeriodSlot, ReconciledDay};

const TIME: &str = "%H:%M";

/// Format a single timetable row.
pub fn format_slot(slot: &MergedPeriodSlot) -> String {
    let mut output = format!(
        "{}-{}  {:<5}",
        slot.start_time.format(TIME),
        slot.end_time.format(TIME),
        slot.period_type.label()
    );

    match &slot.event {
        Some(event) => {
            output.push_str(&format!("  #{}", event.event_id));
            if let Some(title) = &event.title {
                output.push_str(&format!(" {}", title));
            }
            if !event.rooms.is_empty() {
                output.push_str(&format!(" [{}]", event.rooms.join(", ")));
            }
        }
        None => output.push_str("  -"),
    }

    output
}

/// Format a reconciled day, with dividers around the school-time segment.
pub fn format_reconciled_day(date: NaiveDate, day: &ReconciledDay) -> String {
    let mut output = format!("TIMETABLE {} ({} rows)\n", date, day.len());
    output.push_str(&"-".repeat(40));

    for slot in day.before_school() {
        output.push_str(&format!("\n{}", format_slot(slot)));
    }
    if day.number_of_events_before_school > 0 {
        output.push_str("\n-- school day starts --");
    }

    if day.school_time().is_empty() {
        output.push_str("\nNo periods scheduled.");
    }
    for slot in day.school_time() {
        output.push_str(&format!("\n{}", format_slot(slot)));
    }

    if day.number_of_events_after_school > 0 {
        output.push_str("\n-- school day ends --");
    }
    for slot in day.after_school() {
        output.push_str(&format!("\n{}", format_slot(slot)));
    }

    output
}

/// Format whatever should be shown for a day.
pub fn format_day_timetable(date: NaiveDate, timetable: &DayTimetable) -> String {
    match timetable {
        DayTimetable::NonSchoolDay { day_type } => {
            format!("TIMETABLE {}\n{}: no classes", date, day_type.placeholder())
        }
        DayTimetable::Reconciled(day) => format_reconciled_day(date, day),
    }
}

/// Format a recurrence filter, or the not-ready state.
pub fn format_filter(filter: Option<&RecurrenceFilter>) -> String {
    let Some(filter) = filter else {
        return "Recurrence filter: not ready".to_string();
    };

    let mut output = format!(
        "Recurrence filter: {:?}\n  From: {}\n  Time: {}-{}",
        filter.recurrence,
        filter.from_date,
        filter.start_time.format(TIME),
        filter.end_time.format(TIME)
    );
    if let Some(end_date) = filter.end_date {
        output.push_str(&format!("\n  Until: {}", end_date));
    }
    if let Some(occurrences) = filter.occurrences {
        output.push_str(&format!("\n  Occurrences: {}", occurrences));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, NaiveTime};
    use schoolday_core::recurrence::RecurrenceType;
    use schoolday_core::timetable::{reconcile, CalendarEvent, DayType, Period};

    fn make_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
    }

    fn make_time(hour: u32, min: u32) -> NaiveDateTime {
        make_date().and_hms_opt(hour, min, 0).unwrap()
    }

    #[test]
    fn test_format_slot_with_event() {
        let period = Period::class(make_time(9, 0), make_time(9, 45));
        let event = CalendarEvent::new(1, make_time(9, 0), make_time(9, 45))
            .with_title("Maths 7B")
            .with_room("B12");

        assert_eq!(
            format_slot(&MergedPeriodSlot::with_event(&period, &event)),
            "09:00-09:45  Class  #1 Maths 7B [B12]"
        );
    }

    #[test]
    fn test_format_slot_empty_break() {
        let period = Period::break_period(make_time(10, 30), make_time(11, 0));

        assert_eq!(
            format_slot(&MergedPeriodSlot::from_period(&period)),
            "10:30-11:00  Break  -"
        );
    }

    #[test]
    fn test_format_reconciled_day_dividers() {
        let periods = vec![Period::class(make_time(9, 0), make_time(9, 45))];
        let events = vec![
            CalendarEvent::new(1, make_time(7, 30), make_time(8, 0)),
            CalendarEvent::new(2, make_time(16, 0), make_time(17, 0)),
        ];
        let day = reconcile(&periods, &events, make_time(8, 30), make_time(15, 30));

        let output = format_reconciled_day(make_date(), &day);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "TIMETABLE 2024-03-04 (3 rows)");
        assert!(lines[2].contains("#1"));
        assert_eq!(lines[3], "-- school day starts --");
        assert_eq!(lines[5], "-- school day ends --");
        assert!(lines[6].contains("#2"));
    }

    #[test]
    fn test_format_reconciled_day_without_overflow() {
        let periods = vec![Period::class(make_time(9, 0), make_time(9, 45))];
        let day = reconcile(&periods, &[], make_time(8, 30), make_time(15, 30));

        let output = format_reconciled_day(make_date(), &day);

        assert!(!output.contains("school day starts"));
        assert!(!output.contains("school day ends"));
    }

    #[test]
    fn test_format_non_school_day() {
        let output = format_day_timetable(
            make_date(),
            &DayTimetable::NonSchoolDay {
                day_type: DayType::StaffDay,
            },
        );
        assert!(output.ends_with("Staff day: no classes"));
    }

    #[test]
    fn test_format_filter() {
        assert_eq!(format_filter(None), "Recurrence filter: not ready");

        let filter = RecurrenceFilter {
            recurrence: RecurrenceType::Weekly,
            from_date: make_date(),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            end_date: None,
            occurrences: Some(5),
        };
        let output = format_filter(Some(&filter));

        assert!(output.starts_with("Recurrence filter: Weekly"));
        assert!(output.contains("Time: 09:00-17:00"));
        assert!(output.ends_with("Occurrences: 5"));
    }
}
