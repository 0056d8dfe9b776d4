// Event module
// Calendar event model: point events (single date) and span events (start..end)

use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use thiserror::Error;

use crate::utils::date::{touches_day, touches_range};

/// Reasons an event draft is rejected by [`EventDraft::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All events must have a 'desc' property")]
    MissingDescription,
    #[error("All events must have a 'color' property")]
    MissingColor,
    #[error("All events must have either a 'date' property or a 'startDate' and 'endDate' property")]
    MissingDate,
    #[error("Start date must occur before end date.")]
    StartAfterEnd,
}

/// When an event happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTiming {
    /// A single fixed date; only its calendar day matters.
    Point(NaiveDateTime),
    /// A start/end pair with `start <= end`.
    Span {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

/// A validated calendar event.
///
/// Fields are private so an `Event` can only come out of
/// [`EventDraft::validate`] and stays valid for its whole lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    desc: String,
    color: String,
    timing: EventTiming,
    kind: Option<String>,
}

impl Event {
    pub fn desc(&self) -> &str {
        &self.desc
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn timing(&self) -> EventTiming {
        self.timing
    }

    /// Extra style class forwarded to the presentation surface.
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    pub fn is_span(&self) -> bool {
        matches!(self.timing, EventTiming::Span { .. })
    }

    /// Start and end instants; a point event starts and ends on its date.
    pub fn bounds(&self) -> (NaiveDateTime, NaiveDateTime) {
        match self.timing {
            EventTiming::Point(date) => (date, date),
            EventTiming::Span { start, end } => (start, end),
        }
    }

    /// Whether this event touches `date`.
    ///
    /// Point events match on their calendar day. Span events use the
    /// morning/night boundary test.
    pub fn touches(&self, date: NaiveDate) -> bool {
        match self.timing {
            EventTiming::Point(at) => at.date() == date,
            EventTiming::Span { start, end } => touches_day(start, end, date),
        }
    }

    /// Whether this event overlaps the inclusive day range `[from, to]`.
    pub fn overlaps(&self, from: NaiveDate, to: NaiveDate) -> bool {
        let (start, end) = self.bounds();
        touches_range(start, end, from, to)
    }
}

/// An unvalidated event as handed to the calendar.
///
/// Every field is optional so drafts can be deserialized from loosely shaped
/// host data (`startDate`/`endDate` keys are accepted) and rejected with a
/// precise [`ValidationError`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub desc: Option<String>,
    pub color: Option<String>,
    pub date: Option<NaiveDateTime>,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl EventDraft {
    /// Start an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft for a single-day event.
    pub fn point(desc: impl Into<String>, color: impl Into<String>, date: NaiveDateTime) -> Self {
        Self::new().desc(desc).color(color).date(date)
    }

    /// Draft for a multi-day event.
    pub fn span(
        desc: impl Into<String>,
        color: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Self::new().desc(desc).color(color).start_date(start).end_date(end)
    }

    pub fn desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn date(mut self, date: NaiveDateTime) -> Self {
        self.date = Some(date);
        self
    }

    pub fn start_date(mut self, start: NaiveDateTime) -> Self {
        self.start_date = Some(start);
        self
    }

    pub fn end_date(mut self, end: NaiveDateTime) -> Self {
        self.end_date = Some(end);
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Validate the draft into an [`Event`].
    ///
    /// A start/end pair is always order-checked. When a point date is also
    /// present the event is treated as a point event.
    pub fn validate(self) -> Result<Event, ValidationError> {
        let desc = self.desc.ok_or(ValidationError::MissingDescription)?;
        let color = self.color.ok_or(ValidationError::MissingColor)?;

        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if start > end {
                return Err(ValidationError::StartAfterEnd);
            }
        }

        let timing = match (self.date, self.start_date, self.end_date) {
            (Some(date), _, _) => EventTiming::Point(date),
            (None, Some(start), Some(end)) => EventTiming::Span { start, end },
            _ => return Err(ValidationError::MissingDate),
        };

        Ok(Event {
            desc,
            color,
            timing,
            kind: self.kind,
        })
    }
}

impl TryFrom<EventDraft> for Event {
    type Error = ValidationError;

    fn try_from(draft: EventDraft) -> Result<Self, Self::Error> {
        draft.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_point_event_success() {
        let event = EventDraft::point("Standup", "#336699", at(15, 9))
            .validate()
            .unwrap();

        assert_eq!(event.desc(), "Standup");
        assert_eq!(event.color(), "#336699");
        assert!(!event.is_span());
        assert_eq!(event.bounds(), (at(15, 9), at(15, 9)));
    }

    #[test]
    fn test_span_event_success() {
        let event = EventDraft::span("Offsite", "red", at(10, 8), at(14, 17))
            .kind("travel")
            .validate()
            .unwrap();

        assert!(event.is_span());
        assert_eq!(event.kind(), Some("travel"));
    }

    #[test]
    fn test_equal_start_and_end_is_valid() {
        let result = EventDraft::span("Blip", "red", at(10, 8), at(10, 8)).validate();
        assert!(result.is_ok());
    }

    #[test]
    fn test_start_after_end_rejected() {
        let result = EventDraft::span("Backwards", "red", at(14, 8), at(10, 8)).validate();
        assert_eq!(result.unwrap_err(), ValidationError::StartAfterEnd);
    }

    #[test]
    fn test_missing_fields_rejected() {
        assert_eq!(
            EventDraft::new().color("red").date(at(1, 0)).validate().unwrap_err(),
            ValidationError::MissingDescription
        );
        assert_eq!(
            EventDraft::new().desc("x").date(at(1, 0)).validate().unwrap_err(),
            ValidationError::MissingColor
        );
        assert_eq!(
            EventDraft::new().desc("x").color("red").validate().unwrap_err(),
            ValidationError::MissingDate
        );
        // a lone start date is not a span
        assert_eq!(
            EventDraft::new()
                .desc("x")
                .color("red")
                .start_date(at(1, 0))
                .validate()
                .unwrap_err(),
            ValidationError::MissingDate
        );
    }

    #[test]
    fn test_point_date_wins_over_pair() {
        let event = EventDraft::span("Both", "red", at(10, 8), at(12, 8))
            .date(at(11, 9))
            .validate()
            .unwrap();
        assert_eq!(event.timing(), EventTiming::Point(at(11, 9)));

        let backwards = EventDraft::span("Both", "red", at(12, 8), at(10, 8))
            .date(at(11, 9))
            .validate();
        assert_eq!(backwards.unwrap_err(), ValidationError::StartAfterEnd);
    }

    #[test]
    fn test_point_touches_only_its_day() {
        let event = EventDraft::point("Lunch", "green", at(15, 12)).validate().unwrap();
        assert!(event.touches(at(15, 0).date()));
        assert!(!event.touches(at(16, 0).date()));
    }

    #[test]
    fn test_overlaps_range() {
        let event = EventDraft::span("Trip", "blue", at(10, 8), at(12, 8))
            .validate()
            .unwrap();
        assert!(event.overlaps(at(1, 0).date(), at(10, 0).date()));
        assert!(event.overlaps(at(11, 0).date(), at(11, 0).date()));
        assert!(!event.overlaps(at(13, 0).date(), at(20, 0).date()));
    }

    #[test]
    fn test_draft_deserializes_host_keys() {
        let json = r##"{
            "desc": "Migration",
            "color": "#aa0000",
            "startDate": "2025-01-10T08:00:00",
            "endDate": "2025-01-12T18:00:00",
            "type": "ops"
        }"##;
        let draft: EventDraft = serde_json::from_str(json).unwrap();
        let event = Event::try_from(draft).unwrap();
        assert_eq!(event.kind(), Some("ops"));
        assert_eq!(event.bounds(), (at(10, 8), at(12, 18)));
    }
}
