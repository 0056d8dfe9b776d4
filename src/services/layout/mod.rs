//! Lane allocator.
//!
//! Assigns every event segment of a week to a vertical lane. Segments that do
//! not fit are shrunk onto a lower lane (the remainder is queued as a new
//! segment), trimmed from the front one day at a time, or hidden. Every
//! segment-day that cannot be shown is counted against its day so the surface
//! can show a "+N" badge.
//!
//! The lane choice is the maximum over the segment's days of each day's lowest
//! free lane. It is a cheap heuristic, not an optimal interval packing, and
//! its degradation pattern is part of the observable layout.

mod occupancy;

pub use occupancy::{LaneOccupancy, OverflowCounter};

use crate::models::grid::{EventSegment, SegmentState};
use crate::services::skeleton::MonthSkeleton;

/// Answers whether a segment placed at a lane stays inside the row.
pub trait LaneCapacity {
    fn fits(&self, segment: &EventSegment, lane: usize) -> bool;
}

impl<F> LaneCapacity for F
where
    F: Fn(&EventSegment, usize) -> bool,
{
    fn fits(&self, segment: &EventSegment, lane: usize) -> bool {
        self(segment, lane)
    }
}

/// A row that holds a fixed number of lanes regardless of segment size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedLanes(pub usize);

impl LaneCapacity for FixedLanes {
    fn fits(&self, _segment: &EventSegment, lane: usize) -> bool {
        lane < self.0
    }
}

/// A segment together with the allocator's decision for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocatedSegment {
    pub segment: EventSegment,
    pub state: SegmentState,
}

impl AllocatedSegment {
    pub fn is_visible(&self) -> bool {
        !self.state.is_hidden()
    }
}

/// Allocation result for one week.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekLayout {
    pub week: usize,
    /// Classified segments first, in their original order, followed by the
    /// remainders created by shrinking, in creation order.
    pub segments: Vec<AllocatedSegment>,
    pub occupancy: LaneOccupancy,
    pub overflow: OverflowCounter,
}

impl WeekLayout {
    pub fn visible(&self) -> impl Iterator<Item = &AllocatedSegment> {
        self.segments.iter().filter(|s| s.is_visible())
    }
}

/// Allocate lanes for one week's segments, in the order given.
///
/// The worklist grows while it is processed: a shrink appends the remainder,
/// which is handled later in the same pass.
pub fn allocate_week<C>(week: usize, segments: &[EventSegment], capacity: &C) -> WeekLayout
where
    C: LaneCapacity + ?Sized,
{
    let mut work: Vec<AllocatedSegment> = segments
        .iter()
        .map(|&segment| AllocatedSegment {
            segment,
            state: SegmentState::Hidden,
        })
        .collect();
    let mut occupancy = LaneOccupancy::new();
    let mut overflow = OverflowCounter::new();

    let mut index = 0;
    while index < work.len() {
        let mut segment = work[index].segment;

        let (state, remainder) = loop {
            let lane = tentative_lane(&occupancy, &segment);
            if capacity.fits(&segment, lane) {
                occupancy.claim_range(segment.start_day..=segment.end_day, lane);
                break (SegmentState::Positioned { lane }, None);
            }

            if let Some(lower) = shrink_lane(&occupancy, &segment, lane, capacity) {
                let last = last_free_day(&occupancy, &segment, lower);
                let remainder = segment.split_after(last);
                occupancy.claim_range(segment.start_day..=segment.end_day, lower);
                let state = if remainder.is_some() {
                    SegmentState::Shrunk { lane: lower }
                } else {
                    SegmentState::Positioned { lane: lower }
                };
                break (state, remainder);
            }

            overflow.increment(segment.start_day);
            if segment.start_day < segment.end_day {
                segment.advance_start();
            } else {
                break (SegmentState::Hidden, None);
            }
        };

        work[index] = AllocatedSegment { segment, state };
        if let Some(rest) = remainder {
            log::trace!(
                "week {}: event {} split at day {}, lane {:?}",
                week,
                segment.event,
                rest.start_day,
                state.lane()
            );
            work.push(AllocatedSegment {
                segment: rest,
                state: SegmentState::Hidden,
            });
        }
        index += 1;
    }

    WeekLayout {
        week,
        segments: work,
        occupancy,
        overflow,
    }
}

/// The lane a segment would take: the highest of its days' lowest free lanes,
/// raised past any lane that is already claimed on one of its days.
fn tentative_lane(occupancy: &LaneOccupancy, segment: &EventSegment) -> usize {
    let days = segment.start_day..=segment.end_day;
    let mut lane = days
        .clone()
        .map(|day| occupancy.lowest_free(day))
        .max()
        .unwrap_or(0);
    while !days.clone().all(|day| occupancy.is_free(day, lane)) {
        lane += 1;
    }
    lane
}

/// Lowest lane under `lane` that is free on the segment's first day and fits.
fn shrink_lane<C>(
    occupancy: &LaneOccupancy,
    segment: &EventSegment,
    lane: usize,
    capacity: &C,
) -> Option<usize>
where
    C: LaneCapacity + ?Sized,
{
    (0..lane).find(|&lower| {
        occupancy.is_free(segment.start_day, lower) && capacity.fits(segment, lower)
    })
}

/// Last day of the run, starting at the segment's first day, on which `lane` is free.
fn last_free_day(occupancy: &LaneOccupancy, segment: &EventSegment, lane: usize) -> u32 {
    let mut last = segment.start_day;
    for day in segment.start_day + 1..=segment.end_day {
        if !occupancy.is_free(day, lane) {
            break;
        }
        last = day;
    }
    last
}

/// The month skeleton together with every week's allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthLayout {
    pub skeleton: MonthSkeleton,
    pub weeks: Vec<WeekLayout>,
}

impl MonthLayout {
    /// Overflow count of `day`.
    pub fn overflow(&self, day: u32) -> usize {
        self.skeleton.cell(day).map_or(0, |cell| cell.overflow)
    }

    /// Every segment of every week, in week order.
    pub fn segments(&self) -> impl Iterator<Item = &AllocatedSegment> {
        self.weeks.iter().flat_map(|week| week.segments.iter())
    }

    /// Event indices touching `day`.
    pub fn events_on(&self, day: u32) -> &[usize] {
        self.skeleton
            .cell(day)
            .map_or(&[][..], |cell| cell.events.as_slice())
    }
}

/// Allocate every week of a classified skeleton and attach overflow counts
/// to the day cells.
pub fn layout_month<C>(mut skeleton: MonthSkeleton, capacity: &C) -> MonthLayout
where
    C: LaneCapacity + ?Sized,
{
    let weeks: Vec<WeekLayout> = skeleton
        .weeks
        .iter()
        .map(|row| allocate_week(row.index, &row.segments, capacity))
        .collect();

    for week in &weeks {
        for (day, count) in week.overflow.iter() {
            if let Some(cell) = skeleton.cell_mut(day) {
                cell.overflow = count;
            }
        }
    }

    MonthLayout { skeleton, weeks }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::grid::SegmentKind;
    use pretty_assertions::assert_eq;

    fn span(event: usize, start_day: u32, end_day: u32) -> EventSegment {
        EventSegment {
            event,
            week: 1,
            kind: SegmentKind::Span,
            start_col: start_day - 7,
            end_col: end_day - 7,
            start_day,
            end_day,
            origin: event,
        }
    }

    fn point(event: usize, day: u32) -> EventSegment {
        EventSegment {
            kind: SegmentKind::Point,
            ..span(event, day, day)
        }
    }

    fn summary(layout: &WeekLayout) -> Vec<(usize, u32, u32, SegmentState)> {
        layout
            .segments
            .iter()
            .map(|s| (s.segment.event, s.segment.start_day, s.segment.end_day, s.state))
            .collect()
    }

    #[test]
    fn test_single_point_event_takes_lane_zero() {
        let layout = allocate_week(1, &[point(0, 10)], &FixedLanes(3));
        assert_eq!(
            summary(&layout),
            vec![(0, 10, 10, SegmentState::Positioned { lane: 0 })]
        );
        assert!(layout.overflow.is_empty());
    }

    #[test]
    fn test_stacking_uses_next_free_lane() {
        let layout = allocate_week(1, &[span(0, 8, 10), span(1, 10, 12), point(2, 12)], &FixedLanes(3));
        assert_eq!(
            summary(&layout),
            vec![
                (0, 8, 10, SegmentState::Positioned { lane: 0 }),
                (1, 10, 12, SegmentState::Positioned { lane: 1 }),
                (2, 12, 12, SegmentState::Positioned { lane: 0 }),
            ]
        );
    }

    #[test]
    fn test_most_constrained_day_dominates() {
        // day 9 has two lanes taken, so the 8..10 segment lands on lane 2 everywhere
        let layout = allocate_week(
            1,
            &[point(0, 9), point(1, 9), span(2, 8, 10)],
            &FixedLanes(5),
        );
        assert_eq!(layout.segments[2].state, SegmentState::Positioned { lane: 2 });
        assert!(layout.occupancy.is_free(8, 0));
        assert!(!layout.occupancy.is_free(8, 2));
    }

    #[test]
    fn test_tentative_lane_skips_lane_claimed_elsewhere_in_span() {
        // A on 8, X on 10, B on 8..9 (lane 1); C on 9..10 would pick lane 1, which B holds on 9
        let layout = allocate_week(
            1,
            &[span(0, 8, 8), span(1, 10, 10), span(2, 8, 9), span(3, 9, 10)],
            &FixedLanes(5),
        );
        assert_eq!(layout.segments[2].state, SegmentState::Positioned { lane: 1 });
        assert_eq!(layout.segments[3].state, SegmentState::Positioned { lane: 2 });
    }

    #[test]
    fn test_four_events_on_one_day_with_three_lanes() {
        let segments = [span(0, 10, 10), span(1, 10, 10), span(2, 10, 10), span(3, 10, 10)];
        let layout = allocate_week(1, &segments, &FixedLanes(3));

        assert_eq!(
            summary(&layout),
            vec![
                (0, 10, 10, SegmentState::Positioned { lane: 0 }),
                (1, 10, 10, SegmentState::Positioned { lane: 1 }),
                (2, 10, 10, SegmentState::Positioned { lane: 2 }),
                (3, 10, 10, SegmentState::Hidden),
            ]
        );
        assert_eq!(layout.overflow.get(10), 1);
    }

    #[test]
    fn test_fourth_span_shifts_to_free_days() {
        // the fourth event also covers 11..12 where lanes are free
        let segments = [span(0, 10, 10), span(1, 10, 10), span(2, 10, 10), span(3, 10, 12)];
        let layout = allocate_week(1, &segments, &FixedLanes(3));

        assert_eq!(layout.segments[3].state, SegmentState::Positioned { lane: 0 });
        assert_eq!(
            (layout.segments[3].segment.start_day, layout.segments[3].segment.end_day),
            (11, 12)
        );
        assert_eq!(layout.segments[3].segment.start_col, 4);
        assert_eq!(layout.overflow.get(10), 1);
    }

    #[test]
    fn test_span_split_around_full_day() {
        // day 12 is full (3 lanes); a 10..14 span gets [10..11] and the remainder [12..14]
        let segments = [point(0, 12), point(1, 12), point(2, 12), span(3, 10, 14)];
        let layout = allocate_week(1, &segments, &FixedLanes(3));

        assert_eq!(
            summary(&layout),
            vec![
                (0, 12, 12, SegmentState::Positioned { lane: 0 }),
                (1, 12, 12, SegmentState::Positioned { lane: 1 }),
                (2, 12, 12, SegmentState::Positioned { lane: 2 }),
                (3, 10, 11, SegmentState::Shrunk { lane: 0 }),
                (3, 13, 14, SegmentState::Positioned { lane: 0 }),
            ]
        );
        // the remainder lost day 12 to overflow before fitting on 13..14
        assert_eq!(layout.overflow.get(12), 1);
        assert_eq!(layout.overflow.total(), 1);
        assert_eq!(layout.segments[4].segment.origin, 3);
    }

    #[test]
    fn test_shrink_picks_lowest_free_lane_on_first_day() {
        // two lanes; day 9 is full, day 8 has both lanes free
        let segments = [span(0, 9, 9), span(1, 9, 9), span(2, 8, 9)];
        let layout = allocate_week(1, &segments, &FixedLanes(2));

        assert_eq!(
            summary(&layout),
            vec![
                (0, 9, 9, SegmentState::Positioned { lane: 0 }),
                (1, 9, 9, SegmentState::Positioned { lane: 1 }),
                (2, 8, 8, SegmentState::Shrunk { lane: 0 }),
                (2, 9, 9, SegmentState::Hidden),
            ]
        );
        assert_eq!(layout.overflow.get(9), 1);
        assert_eq!(layout.overflow.get(8), 0);
    }

    #[test]
    fn test_remainder_fits_after_overflowing_its_first_day() {
        // two lanes; day 9 holds lanes 0 and 1, day 8 holds lane 1 only
        let segments = [span(0, 9, 9), span(1, 8, 9), span(2, 8, 10)];
        let layout = allocate_week(1, &segments, &FixedLanes(2));

        assert_eq!(layout.segments[1].state, SegmentState::Positioned { lane: 1 });
        assert_eq!(layout.segments[2].state, SegmentState::Shrunk { lane: 0 });
        assert_eq!(
            (layout.segments[2].segment.start_day, layout.segments[2].segment.end_day),
            (8, 8)
        );
        assert_eq!(layout.segments[3].state, SegmentState::Positioned { lane: 0 });
        assert_eq!(layout.segments[3].segment.start_day, 10);
        assert_eq!(layout.overflow.get(9), 1);
    }

    #[test]
    fn test_no_capacity_routes_everything_to_overflow() {
        let nothing_fits = |_: &EventSegment, _: usize| false;
        let layout = allocate_week(1, &[span(0, 8, 10), point(1, 9)], &nothing_fits);

        assert!(layout.segments.iter().all(|s| s.state == SegmentState::Hidden));
        assert_eq!(layout.overflow.get(8), 1);
        assert_eq!(layout.overflow.get(9), 2);
        assert_eq!(layout.overflow.get(10), 1);
        assert!(layout.occupancy.claimed(9).is_empty());
    }

    #[test]
    fn test_empty_week() {
        let layout = allocate_week(3, &[], &FixedLanes(3));
        assert_eq!(layout.week, 3);
        assert!(layout.segments.is_empty());
        assert!(layout.overflow.is_empty());
    }
}
