//! Presentation surface port.
//!
//! The calendar never draws pixels itself. It hands the skeleton and the
//! segments to a [`PresentationSurface`] and reads back measured sizes through
//! [`MeasurementPort`] between the structural pass and the placement pass.

mod scene;

pub use scene::{RenderedSegment, SceneSurface, SurfaceMetrics};

use crate::models::grid::{EventSegment, WeekRow};
use crate::services::geometry::SegmentGeometry;

/// Opaque reference to a rendered segment element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentHandle(pub usize);

/// Text and styling of a rendered segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentStyle {
    pub desc: String,
    pub color: String,
    /// Extra style class taken from the event's kind.
    pub kind: Option<String>,
    /// Clip overlong text with an ellipsis.
    pub ellipsis: bool,
}

/// Header texts for the skeleton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkeletonLabels {
    pub title: String,
    pub previous: &'static str,
    pub next: &'static str,
    pub days: Vec<&'static str>,
}

/// Sizes of representative elements, in pixels, as currently rendered.
///
/// Only meaningful after [`PresentationSurface::render_skeleton`]; before that
/// a surface may answer zero.
#[cfg_attr(test, mockall::automock)]
pub trait MeasurementPort {
    /// Content height of a day cell.
    fn measure_reference_cell_height(&self) -> f32;
    /// Outer height of a day column.
    fn measure_reference_column_height(&self) -> f32;
    /// Outer width of a day column.
    fn measure_reference_column_width(&self) -> f32;
    /// Height of the date label inside a day cell.
    fn measure_reference_label_height(&self) -> f32;
    /// Rendered height of one segment element.
    fn measure_segment_height(&self, handle: SegmentHandle) -> f32;
    /// Width of the week-row container percentages are relative to.
    fn measure_row_width(&self) -> f32;
    /// Height of the week-row container percentages are relative to.
    fn measure_row_height(&self) -> f32;
}

pub trait PresentationSurface: MeasurementPort {
    /// Discard everything from the previous draw.
    fn clear(&mut self);

    fn render_skeleton(&mut self, weeks: &[WeekRow], labels: &SkeletonLabels);

    fn render_segment(&mut self, segment: &EventSegment, style: &SegmentStyle) -> SegmentHandle;

    fn set_segment_geometry(&mut self, handle: SegmentHandle, geometry: SegmentGeometry);

    fn set_segment_hidden(&mut self, handle: SegmentHandle, hidden: bool);

    fn render_overflow_badge(&mut self, day: u32, count: usize);

    /// Mark or unmark a drawn day cell as selected.
    fn set_day_selected(&mut self, day: u32, selected: bool);
}
