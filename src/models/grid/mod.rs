//! Grid structures rebuilt on every draw: day cells, week rows and the event
//! segments laid over them.

/// One of the 7 cells in a week row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayCell {
    /// Day of the month, or `None` for padding before/after the month.
    pub day: Option<u32>,
    /// The date is in the disabled-dates set.
    pub disabled: bool,
    /// The date is part of the current selection.
    pub selected: bool,
    /// Indices into the calendar's event list of events touching this day.
    pub events: Vec<usize>,
    /// Number of segment-days that could not be shown on this day.
    pub overflow: usize,
}

impl DayCell {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn in_month(day: u32, disabled: bool) -> Self {
        Self {
            day: Some(day),
            disabled,
            ..Self::default()
        }
    }

    pub fn is_blank(&self) -> bool {
        self.day.is_none()
    }
}

/// A week of the displayed month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekRow {
    pub index: usize,
    pub cells: [DayCell; 7],
    /// Segments in lane-assignment order; filled by the classifier.
    pub segments: Vec<EventSegment>,
}

/// Whether a segment came from a point or a span event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Span,
    Point,
}

/// The part of one event's presence confined to a single week.
///
/// Columns and days move together: `end_col - start_col == end_day - start_day`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventSegment {
    /// Index of the owning event in the calendar's event list.
    pub event: usize,
    pub week: usize,
    pub kind: SegmentKind,
    pub start_col: u32,
    pub end_col: u32,
    pub start_day: u32,
    pub end_day: u32,
    /// Position in the week's classified list of the segment this one was
    /// split from (itself when it was never split).
    pub origin: usize,
}

impl EventSegment {
    /// Number of days covered.
    pub fn day_count(&self) -> u32 {
        self.end_day - self.start_day + 1
    }

    pub fn covers(&self, day: u32) -> bool {
        (self.start_day..=self.end_day).contains(&day)
    }

    /// Column holding `day`.
    pub fn column_for(&self, day: u32) -> u32 {
        self.start_col + (day - self.start_day)
    }

    /// Drop the first day of the segment.
    pub(crate) fn advance_start(&mut self) {
        self.start_day += 1;
        self.start_col += 1;
    }

    /// Truncate to end on `day` and return the remainder starting the day after.
    pub(crate) fn split_after(&mut self, day: u32) -> Option<EventSegment> {
        if day >= self.end_day {
            return None;
        }
        let remainder = EventSegment {
            start_day: day + 1,
            start_col: self.column_for(day + 1),
            ..*self
        };
        self.end_col = self.column_for(day);
        self.end_day = day;
        Some(remainder)
    }
}

/// How the lane allocator resolved a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentState {
    /// Placed at `lane` over its (possibly start-trimmed) span.
    Positioned { lane: usize },
    /// Truncated to fit at a lower `lane`; the remainder became a new segment.
    Shrunk { lane: usize },
    /// Nothing of the segment could be shown.
    Hidden,
}

impl SegmentState {
    pub fn lane(&self) -> Option<usize> {
        match *self {
            SegmentState::Positioned { lane } | SegmentState::Shrunk { lane } => Some(lane),
            SegmentState::Hidden => None,
        }
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, SegmentState::Hidden)
    }
}
