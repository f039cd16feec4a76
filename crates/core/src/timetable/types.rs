use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Whether a bell-time period is teaching time or a break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PeriodType {
    Class,
    Break,
}

impl PeriodType {
    /// Returns the label used when rendering a row for this period type.
    pub fn label(&self) -> &'static str {
        match self {
            PeriodType::Class => "Class",
            PeriodType::Break => "Break",
        }
    }
}

/// A fixed bell-time period for a single school day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    #[serde(rename = "type")]
    pub period_type: PeriodType,
}

impl Period {
    /// Creates a new period.
    pub fn new(start_time: NaiveDateTime, end_time: NaiveDateTime, period_type: PeriodType) -> Self {
        Self {
            start_time,
            end_time,
            period_type,
        }
    }

    /// Creates a class period.
    pub fn class(start_time: NaiveDateTime, end_time: NaiveDateTime) -> Self {
        Self::new(start_time, end_time, PeriodType::Class)
    }

    /// Creates a break period.
    pub fn break_period(start_time: NaiveDateTime, end_time: NaiveDateTime) -> Self {
        Self::new(start_time, end_time, PeriodType::Break)
    }
}

/// A calendar event attended by the party whose timetable is being shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub event_id: i64,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attendees: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rooms: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl CalendarEvent {
    /// Creates a new event with no metadata.
    pub fn new(event_id: i64, start_time: NaiveDateTime, end_time: NaiveDateTime) -> Self {
        Self {
            event_id,
            start_time,
            end_time,
            title: None,
            attendees: Vec::new(),
            rooms: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Sets the title for this event.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Adds a room to this event.
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.rooms.push(room.into());
        self
    }

    /// Adds an attendee to this event.
    pub fn with_attendee(mut self, attendee: impl Into<String>) -> Self {
        self.attendees.push(attendee.into());
        self
    }

    /// Adds a tag to this event.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }
}

/// One row of a reconciled timetable: a period, an event, or both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedPeriodSlot {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    #[serde(rename = "type")]
    pub period_type: PeriodType,
    pub event: Option<CalendarEvent>,
}

impl MergedPeriodSlot {
    /// A period with nothing scheduled in it.
    pub fn from_period(period: &Period) -> Self {
        Self {
            start_time: period.start_time,
            end_time: period.end_time,
            period_type: period.period_type,
            event: None,
        }
    }

    /// A period with an event starting at the same time.
    pub fn with_event(period: &Period, event: &CalendarEvent) -> Self {
        Self {
            event: Some(event.clone()),
            ..Self::from_period(period)
        }
    }

    /// An event that does not line up with any period.
    pub fn from_event(event: &CalendarEvent) -> Self {
        Self {
            start_time: event.start_time,
            end_time: event.end_time,
            period_type: PeriodType::Class,
            event: Some(event.clone()),
        }
    }

    /// Returns the event id, if an event occupies this slot.
    pub fn event_id(&self) -> Option<i64> {
        self.event.as_ref().map(|event| event.event_id)
    }
}

/// The merged sequence for one day plus the size of each overflow segment.
///
/// Layout is `before school ++ school time ++ after school`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconciledDay {
    pub slots: Vec<MergedPeriodSlot>,
    pub number_of_events_before_school: usize,
    pub number_of_events_after_school: usize,
}

impl ReconciledDay {
    /// Slots for events starting before the school day.
    pub fn before_school(&self) -> &[MergedPeriodSlot] {
        &self.slots[..self.school_time_start()]
    }

    /// Periods and the events spliced between them.
    pub fn school_time(&self) -> &[MergedPeriodSlot] {
        &self.slots[self.school_time_start()..self.school_time_end()]
    }

    /// Slots for events starting after the school day.
    pub fn after_school(&self) -> &[MergedPeriodSlot] {
        &self.slots[self.school_time_end()..]
    }

    fn school_time_start(&self) -> usize {
        self.number_of_events_before_school.min(self.slots.len())
    }

    fn school_time_end(&self) -> usize {
        self.slots
            .len()
            .saturating_sub(self.number_of_events_after_school)
            .max(self.school_time_start())
    }

    /// Total number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if there is nothing to render.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// The kind of day, as reported by the school calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayType {
    #[default]
    SchoolDay,
    Holiday,
    StaffDay,
}

impl DayType {
    /// Returns true if periods run on this day.
    pub fn is_school_day(&self) -> bool {
        matches!(self, DayType::SchoolDay)
    }

    /// Returns the placeholder shown instead of a timetable.
    pub fn placeholder(&self) -> &'static str {
        match self {
            DayType::SchoolDay => "School day",
            DayType::Holiday => "Holiday",
            DayType::StaffDay => "Staff day",
        }
    }
}

/// A party's timetable query result for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableDay {
    pub date: NaiveDate,
    #[serde(default)]
    pub day_type: DayType,
    pub school_day_start: NaiveDateTime,
    pub school_day_end: NaiveDateTime,
    #[serde(default)]
    pub periods: Vec<Period>,
    #[serde(default)]
    pub events: Vec<CalendarEvent>,
}

/// What to render for a day: a placeholder, or the reconciled rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DayTimetable {
    #[serde(rename_all = "camelCase")]
    NonSchoolDay { day_type: DayType },
    Reconciled(ReconciledDay),
}
