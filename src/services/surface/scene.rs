use std::collections::BTreeMap;

use super::{MeasurementPort, PresentationSurface, SegmentHandle, SegmentStyle, SkeletonLabels};
use crate::models::grid::{EventSegment, WeekRow};
use crate::services::geometry::SegmentGeometry;

/// Pixel sizes a [`SceneSurface`] reports when measured.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceMetrics {
    pub cell_height: f32,
    pub column_height: f32,
    pub column_width: f32,
    pub label_height: f32,
    pub segment_height: f32,
}

impl Default for SurfaceMetrics {
    /// 100x100 columns with 18px segments: three lanes per row.
    fn default() -> Self {
        Self {
            cell_height: 96.0,
            column_height: 100.0,
            column_width: 100.0,
            label_height: 16.0,
            segment_height: 18.0,
        }
    }
}

impl SurfaceMetrics {
    /// Every size zero, as before the first layout pass.
    pub fn unmeasured() -> Self {
        Self {
            cell_height: 0.0,
            column_height: 0.0,
            column_width: 0.0,
            label_height: 0.0,
            segment_height: 0.0,
        }
    }
}

/// One rendered segment element and whatever the calendar set on it.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSegment {
    pub segment: EventSegment,
    pub style: SegmentStyle,
    pub geometry: Option<SegmentGeometry>,
    pub hidden: bool,
}

/// A retained-mode surface that records every call.
///
/// The egui front end paints from it; tests inspect it.
#[derive(Debug, Clone, Default)]
pub struct SceneSurface {
    metrics: SurfaceMetrics,
    weeks: Vec<WeekRow>,
    labels: Option<SkeletonLabels>,
    segments: Vec<RenderedSegment>,
    badges: BTreeMap<u32, usize>,
    skeleton_rendered: bool,
}

impl SceneSurface {
    pub fn new(metrics: SurfaceMetrics) -> Self {
        Self {
            metrics,
            ..Self::default()
        }
    }

    pub fn metrics(&self) -> SurfaceMetrics {
        self.metrics
    }

    pub fn set_metrics(&mut self, metrics: SurfaceMetrics) {
        self.metrics = metrics;
    }

    pub fn weeks(&self) -> &[WeekRow] {
        &self.weeks
    }

    pub fn labels(&self) -> Option<&SkeletonLabels> {
        self.labels.as_ref()
    }

    pub fn segments(&self) -> &[RenderedSegment] {
        &self.segments
    }

    /// Segments that are placed and not hidden.
    pub fn visible_segments(&self) -> impl Iterator<Item = &RenderedSegment> {
        self.segments
            .iter()
            .filter(|s| !s.hidden && s.geometry.is_some())
    }

    pub fn badges(&self) -> &BTreeMap<u32, usize> {
        &self.badges
    }

    pub fn badge(&self, day: u32) -> Option<usize> {
        self.badges.get(&day).copied()
    }

    /// Nothing is laid out until the skeleton exists.
    fn laid_out(&self, value: f32) -> f32 {
        if self.skeleton_rendered {
            value
        } else {
            0.0
        }
    }
}

impl MeasurementPort for SceneSurface {
    fn measure_reference_cell_height(&self) -> f32 {
        self.laid_out(self.metrics.cell_height)
    }

    fn measure_reference_column_height(&self) -> f32 {
        self.laid_out(self.metrics.column_height)
    }

    fn measure_reference_column_width(&self) -> f32 {
        self.laid_out(self.metrics.column_width)
    }

    fn measure_reference_label_height(&self) -> f32 {
        self.laid_out(self.metrics.label_height)
    }

    fn measure_segment_height(&self, handle: SegmentHandle) -> f32 {
        if handle.0 < self.segments.len() {
            self.metrics.segment_height
        } else {
            0.0
        }
    }

    fn measure_row_width(&self) -> f32 {
        self.laid_out(self.metrics.column_width * 7.0)
    }

    fn measure_row_height(&self) -> f32 {
        self.laid_out(self.metrics.column_height)
    }
}

impl PresentationSurface for SceneSurface {
    fn clear(&mut self) {
        self.weeks.clear();
        self.labels = None;
        self.segments.clear();
        self.badges.clear();
        self.skeleton_rendered = false;
    }

    fn render_skeleton(&mut self, weeks: &[WeekRow], labels: &SkeletonLabels) {
        self.weeks = weeks.to_vec();
        self.labels = Some(labels.clone());
        self.skeleton_rendered = true;
    }

    fn render_segment(&mut self, segment: &EventSegment, style: &SegmentStyle) -> SegmentHandle {
        self.segments.push(RenderedSegment {
            segment: *segment,
            style: style.clone(),
            geometry: None,
            hidden: false,
        });
        SegmentHandle(self.segments.len() - 1)
    }

    fn set_segment_geometry(&mut self, handle: SegmentHandle, geometry: SegmentGeometry) {
        if let Some(rendered) = self.segments.get_mut(handle.0) {
            rendered.geometry = Some(geometry);
        }
    }

    fn set_segment_hidden(&mut self, handle: SegmentHandle, hidden: bool) {
        if let Some(rendered) = self.segments.get_mut(handle.0) {
            rendered.hidden = hidden;
        }
    }

    fn render_overflow_badge(&mut self, day: u32, count: usize) {
        if count > 0 {
            self.badges.insert(day, count);
        }
    }

    fn set_day_selected(&mut self, day: u32, selected: bool) {
        if let Some(cell) = self
            .weeks
            .iter_mut()
            .flat_map(|week| week.cells.iter_mut())
            .find(|cell| cell.day == Some(day))
        {
            cell.selected = selected;
        }
    }
}
