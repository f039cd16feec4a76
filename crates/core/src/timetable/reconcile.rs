//! Period reconciliation: merging a day's bell times with a party's events.
//!
//! Pure functions only. The output is rebuilt from scratch on every call and
//! never mutates the inputs.

use chrono::NaiveDateTime;

use super::types::{CalendarEvent, MergedPeriodSlot, Period, ReconciledDay};

/// Where an unmatched event lands relative to the school day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventPlacement {
    /// Starts before the school day begins.
    BeforeSchool,
    /// Starts within the school day (bounds inclusive).
    SchoolTime,
    /// Starts after the school day ends.
    AfterSchool,
}

/// Classifies a start time against the school day bounds.
pub fn classify_event(
    start_time: NaiveDateTime,
    school_day_start: NaiveDateTime,
    school_day_end: NaiveDateTime,
) -> EventPlacement {
    if start_time < school_day_start {
        EventPlacement::BeforeSchool
    } else if start_time > school_day_end {
        EventPlacement::AfterSchool
    } else {
        EventPlacement::SchoolTime
    }
}

/// Merges periods and events into a single chronological sequence.
///
/// 1. Each period emits one slot per event starting at exactly the same time,
///    or a single empty slot when nothing matches.
/// 2. Remaining school-time events are spliced in front of the first slot
///    that starts strictly later. Events with no later slot go to the end of
///    the school-time segment.
/// 3. Events before / after the school day become overflow slots at the head
///    and tail, ordered by start time with ties kept in input order.
///
/// `periods` are expected in ascending start order and inside the school day
/// (see `validate_day`).
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use schoolday_core::timetable::{reconcile, CalendarEvent, Period};
///
/// let at = |h, m| NaiveDate::from_ymd_opt(2024, 3, 4).unwrap().and_hms_opt(h, m, 0).unwrap();
///
/// let periods = vec![Period::class(at(9, 0), at(9, 45))];
/// let events = vec![CalendarEvent::new(1, at(9, 0), at(9, 45))];
///
/// let day = reconcile(&periods, &events, at(8, 30), at(15, 30));
/// assert_eq!(day.slots.len(), 1);
/// assert_eq!(day.slots[0].event_id(), Some(1));
/// ```
pub fn reconcile(
    periods: &[Period],
    events: &[CalendarEvent],
    school_day_start: NaiveDateTime,
    school_day_end: NaiveDateTime,
) -> ReconciledDay {
    let mut consumed = vec![false; events.len()];
    let mut school_time = Vec::with_capacity(periods.len() + events.len());

    for period in periods {
        let mut matched = false;
        for (index, event) in events.iter().enumerate() {
            if !consumed[index] && event.start_time == period.start_time {
                consumed[index] = true;
                matched = true;
                school_time.push(MergedPeriodSlot::with_event(period, event));
            }
        }
        if !matched {
            school_time.push(MergedPeriodSlot::from_period(period));
        }
    }

    let mut before_school = Vec::new();
    let mut after_school = Vec::new();

    let unmatched = events
        .iter()
        .zip(&consumed)
        .filter(|(_, consumed)| !**consumed)
        .map(|(event, _)| event);

    for event in unmatched {
        match classify_event(event.start_time, school_day_start, school_day_end) {
            EventPlacement::BeforeSchool => before_school.push(MergedPeriodSlot::from_event(event)),
            EventPlacement::AfterSchool => after_school.push(MergedPeriodSlot::from_event(event)),
            EventPlacement::SchoolTime => splice_event(&mut school_time, event),
        }
    }

    // sort_by_key is stable
    before_school.sort_by_key(|slot| slot.start_time);
    after_school.sort_by_key(|slot| slot.start_time);

    let number_of_events_before_school = before_school.len();
    let number_of_events_after_school = after_school.len();

    let mut slots = before_school;
    slots.append(&mut school_time);
    slots.append(&mut after_school);

    ReconciledDay {
        slots,
        number_of_events_before_school,
        number_of_events_after_school,
    }
}

/// Inserts an event slot before the first slot that starts strictly later.
fn splice_event(slots: &mut Vec<MergedPeriodSlot>, event: &CalendarEvent) {
    let position = slots
        .iter()
        .position(|slot| slot.start_time > event.start_time)
        .unwrap_or(slots.len());
    slots.insert(position, MergedPeriodSlot::from_event(event));
}
