use super::{Calendar, CalendarError};
use crate::models::event::Event;
use crate::models::grid::EventSegment;
use crate::services::classifier::classify;
use crate::services::geometry::{GeometryMapper, RowCapacity};
use crate::services::layout::{layout_month, MonthLayout};
use crate::services::skeleton::{build_skeleton, MonthSkeleton};
use crate::services::surface::{PresentationSurface, SegmentHandle, SegmentStyle, SkeletonLabels};
use crate::utils::labels::{day_labels, month_title, neighbour_month_labels};

impl<S: PresentationSurface> Calendar<S> {
    /// Rebuild the month and render it.
    ///
    /// Runs the before-draw hooks, clears the surface, builds and classifies
    /// the skeleton, renders it with one element per segment, measures, runs
    /// the lane allocator, then positions or hides every element and adds the
    /// overflow badges. A failing hook aborts before anything is cleared.
    pub fn draw(&mut self) -> Result<(), CalendarError> {
        for hook in &mut self.listeners.before_draw {
            hook(self.month).map_err(CalendarError::PreDraw)?;
        }

        self.surface.clear();

        let mut skeleton = build_skeleton(self.month, self.config.first_day_of_week, &self.disabled);
        classify(&mut skeleton, &self.events);
        self.mark_selected(&mut skeleton);

        let labels = self.skeleton_labels();
        self.surface.render_skeleton(&skeleton.weeks, &labels);

        // Structural pass: one element per classified segment so it can be measured.
        let mut handles: Vec<Vec<SegmentHandle>> = Vec::with_capacity(skeleton.weeks.len());
        for week in &skeleton.weeks {
            let mut row = Vec::with_capacity(week.segments.len());
            for segment in &week.segments {
                let style = segment_style(&self.events, segment, self.config.ellipsis);
                row.push(self.surface.render_segment(segment, &style));
            }
            handles.push(row);
        }

        let mapper = GeometryMapper::from_port(&self.surface);
        if !mapper.is_available() {
            log::warn!(
                "surface reported no usable geometry for {}-{:02}; every segment overflows",
                self.month.year,
                self.month.month1()
            );
        }

        let heights: Vec<Vec<f32>> = handles
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&handle| self.surface.measure_segment_height(handle))
                    .collect()
            })
            .collect();
        let height_of = |segment: &EventSegment| {
            heights
                .get(segment.week)
                .and_then(|row| row.get(segment.origin))
                .copied()
                .unwrap_or(0.0)
        };

        let layout = layout_month(skeleton, &RowCapacity::new(&mapper, height_of));

        // Placement pass.
        for week in &layout.weeks {
            let classified = handles.get(week.week).map_or(&[][..], |row| row.as_slice());
            for (position, allocated) in week.segments.iter().enumerate() {
                let segment = allocated.segment;
                let handle = match classified.get(position) {
                    Some(&handle) => handle,
                    None => {
                        let style = segment_style(&self.events, &segment, self.config.ellipsis);
                        self.surface.render_segment(&segment, &style)
                    }
                };

                let geometry = allocated.state.lane().and_then(|lane| {
                    mapper.place(lane, segment.start_col, segment.end_col, height_of(&segment))
                });
                match geometry {
                    Some(geometry) => {
                        self.surface.set_segment_geometry(handle, geometry);
                        self.surface.set_segment_hidden(handle, false);
                    }
                    None => self.surface.set_segment_hidden(handle, true),
                }
            }

            for (day, count) in week.overflow.iter() {
                self.surface.render_overflow_badge(day, count);
            }
        }

        log_summary(&layout);
        self.layout = Some(layout);
        Ok(())
    }

    fn mark_selected(&self, skeleton: &mut MonthSkeleton) {
        for date in &self.selection {
            if !self.month.contains(*date) {
                continue;
            }
            if let Some(cell) = skeleton.cell_mut(chrono::Datelike::day(date)) {
                cell.selected = true;
            }
        }
    }

    pub(super) fn skeleton_labels(&self) -> SkeletonLabels {
        let (previous, next) = neighbour_month_labels(self.month.month0);
        SkeletonLabels {
            title: month_title(
                self.month.year,
                self.month.month0,
                self.config.abbr_month,
                self.config.abbr_year,
            ),
            previous,
            next,
            days: day_labels(self.config.abbr_day, self.config.first_day_of_week),
        }
    }
}

fn segment_style(events: &[Event], segment: &EventSegment, ellipsis: bool) -> SegmentStyle {
    let event = events.get(segment.event);
    SegmentStyle {
        desc: event.map(|e| e.desc().to_string()).unwrap_or_default(),
        color: event.map(|e| e.color().to_string()).unwrap_or_default(),
        kind: event.and_then(|e| e.kind()).map(str::to_string),
        ellipsis,
    }
}

fn log_summary(layout: &MonthLayout) {
    let total = layout.segments().count();
    let visible = layout.segments().filter(|s| s.is_visible()).count();
    let overflow: usize = layout.weeks.iter().map(|w| w.overflow.total()).sum();
    log::debug!(
        "drew {}-{:02}: {} weeks, {} segments ({} visible), {} overflowed segment-days",
        layout.skeleton.month.year,
        layout.skeleton.month.month1(),
        layout.weeks.len(),
        total,
        visible,
        overflow
    );
}
