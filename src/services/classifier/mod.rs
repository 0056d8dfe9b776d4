//! Event classifier.
//!
//! Walks the skeleton day by day, records which events touch each day, and
//! collects one segment per event per week it touches.

use std::collections::BTreeMap;

use crate::models::event::Event;
use crate::models::grid::{EventSegment, SegmentKind, WeekRow};
use crate::services::skeleton::MonthSkeleton;

/// First and last touched (column, day) of one event within one week.
#[derive(Debug, Clone, Copy)]
struct Extent {
    start_col: u32,
    start_day: u32,
    end_col: u32,
    end_day: u32,
}

impl Extent {
    fn at(col: u32, day: u32) -> Self {
        Self {
            start_col: col,
            start_day: day,
            end_col: col,
            end_day: day,
        }
    }

    fn extend_to(&mut self, col: u32, day: u32) {
        self.end_col = col;
        self.end_day = day;
    }
}

/// Fill every cell's event list and every week's segment list.
///
/// Within a week span segments come first, then point segments, each ordered
/// by event index. The lane allocator relies on that order for priority.
pub fn classify(skeleton: &mut MonthSkeleton, events: &[Event]) {
    let month = skeleton.month;
    for week in &mut skeleton.weeks {
        classify_week(week, events, |day| month.date(day));
    }
}

fn classify_week<F>(week: &mut WeekRow, events: &[Event], date_of: F)
where
    F: Fn(u32) -> Option<chrono::NaiveDate>,
{
    let mut spans: BTreeMap<usize, Extent> = BTreeMap::new();
    let mut points: BTreeMap<usize, Extent> = BTreeMap::new();

    for cell_col in 0..7u32 {
        let Some(day) = week.cells[cell_col as usize].day else {
            continue;
        };
        let Some(date) = date_of(day) else {
            continue;
        };

        for (index, event) in events.iter().enumerate() {
            if !event.touches(date) {
                continue;
            }
            week.cells[cell_col as usize].events.push(index);

            let group = if event.is_span() { &mut spans } else { &mut points };
            group
                .entry(index)
                .and_modify(|extent| extent.extend_to(cell_col, day))
                .or_insert_with(|| Extent::at(cell_col, day));
        }
    }

    let ordered = spans
        .into_iter()
        .map(|(index, extent)| (index, extent, SegmentKind::Span))
        .chain(
            points
                .into_iter()
                .map(|(index, extent)| (index, extent, SegmentKind::Point)),
        );

    week.segments = ordered
        .enumerate()
        .map(|(origin, (event, extent, kind))| EventSegment {
            event,
            week: week.index,
            kind,
            start_col: extent.start_col,
            end_col: extent.end_col,
            start_day: extent.start_day,
            end_day: extent.end_day,
            origin,
        })
        .collect();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::calendar_month::CalendarMonth;
    use crate::models::event::EventDraft;
    use crate::services::skeleton::{build_skeleton, DisabledDates};
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn march_2025(events: &[Event]) -> MonthSkeleton {
        // 1 Mar 2025 is a Saturday; rows: [1], [2..8], [9..15], [16..22], [23..29], [30, 31]
        let mut skeleton = build_skeleton(
            CalendarMonth::from_month1(2025, 3).unwrap(),
            0,
            &DisabledDates::new(),
        );
        classify(&mut skeleton, events);
        skeleton
    }

    #[test]
    fn test_point_event_single_cell() {
        let events = vec![EventDraft::point("Dentist", "teal", at(3, 12, 9)).validate().unwrap()];
        let skeleton = march_2025(&events);

        assert_eq!(skeleton.cell(12).unwrap().events, vec![0]);
        assert!(skeleton.cell(13).unwrap().events.is_empty());

        let week = &skeleton.weeks[2];
        assert_eq!(week.segments.len(), 1);
        let seg = week.segments[0];
        assert_eq!((seg.start_day, seg.end_day), (12, 12));
        assert_eq!((seg.start_col, seg.end_col), (3, 3));
        assert_eq!(seg.kind, SegmentKind::Point);
    }

    #[test]
    fn test_span_event_split_across_weeks() {
        // Thu 6 Mar .. Tue 11 Mar
        let events = vec![EventDraft::span("Trip", "blue", at(3, 6, 8), at(3, 11, 18))
            .validate()
            .unwrap()];
        let skeleton = march_2025(&events);

        let first = skeleton.weeks[1].segments[0];
        assert_eq!((first.start_day, first.end_day), (6, 8));
        assert_eq!((first.start_col, first.end_col), (4, 6));

        let second = skeleton.weeks[2].segments[0];
        assert_eq!((second.start_day, second.end_day), (9, 11));
        assert_eq!((second.start_col, second.end_col), (0, 2));
    }

    #[test]
    fn test_span_from_previous_month_starts_at_first_shown_day() {
        let events = vec![EventDraft::span("Carry", "gray", at(2, 20, 0), at(3, 3, 12))
            .validate()
            .unwrap()];
        let skeleton = march_2025(&events);

        let first = skeleton.weeks[0].segments[0];
        assert_eq!((first.start_day, first.end_day, first.start_col, first.end_col), (1, 1, 6, 6));
        let second = skeleton.weeks[1].segments[0];
        assert_eq!((second.start_day, second.end_day, second.start_col, second.end_col), (2, 3, 0, 1));
    }

    #[test]
    fn test_span_into_next_month_ends_at_last_day() {
        let events = vec![EventDraft::span("Carry", "gray", at(3, 29, 0), at(4, 9, 12))
            .validate()
            .unwrap()];
        let skeleton = march_2025(&events);

        let last = skeleton.weeks[5].segments[0];
        assert_eq!((last.start_day, last.end_day, last.start_col, last.end_col), (30, 31, 0, 1));
    }

    #[test]
    fn test_spans_before_points_then_by_index() {
        let events = vec![
            EventDraft::point("P0", "red", at(3, 10, 9)).validate().unwrap(),
            EventDraft::span("S1", "red", at(3, 10, 9), at(3, 11, 9)).validate().unwrap(),
            EventDraft::point("P2", "red", at(3, 11, 9)).validate().unwrap(),
            EventDraft::span("S3", "red", at(3, 9, 9), at(3, 10, 9)).validate().unwrap(),
        ];
        let skeleton = march_2025(&events);

        let order: Vec<(usize, usize)> = skeleton.weeks[2]
            .segments
            .iter()
            .map(|s| (s.event, s.origin))
            .collect();
        assert_eq!(order, vec![(1, 0), (3, 1), (0, 2), (2, 3)]);
    }

    #[test]
    fn test_events_outside_month_ignored() {
        let events = vec![EventDraft::point("Elsewhere", "red", at(4, 10, 9)).validate().unwrap()];
        let skeleton = march_2025(&events);
        assert!(skeleton.weeks.iter().all(|w| w.segments.is_empty()));
    }
}
