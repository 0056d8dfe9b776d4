//! Geometry mapper.
//!
//! Turns a lane index and a column range into percentage offsets inside the
//! week row, using reference sizes measured after the skeleton was rendered.

use crate::models::grid::EventSegment;
use crate::services::layout::LaneCapacity;
use crate::services::surface::MeasurementPort;

/// Vertical gap between stacked segments, in pixels.
pub const SEGMENT_GAP: f32 = 2.0;
/// Offset of the first lane below the date label.
const TOP_OFFSET: f32 = 3.0;
/// Offset of a segment from its column's left edge.
const LEFT_OFFSET: f32 = 1.0;

/// Reference sizes read from the surface.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReferenceMetrics {
    pub cell_height: f32,
    pub column_height: f32,
    pub column_width: f32,
    pub label_height: f32,
}

impl ReferenceMetrics {
    pub fn measure<P>(port: &P) -> Self
    where
        P: MeasurementPort + ?Sized,
    {
        Self {
            cell_height: port.measure_reference_cell_height(),
            column_height: port.measure_reference_column_height(),
            column_width: port.measure_reference_column_width(),
            label_height: port.measure_reference_label_height(),
        }
    }

    /// Zero or non-finite sizes mean the surface has not laid anything out yet.
    pub fn is_usable(&self) -> bool {
        let positive = |v: f32| v.is_finite() && v > 0.0;
        positive(self.cell_height)
            && positive(self.column_height)
            && positive(self.column_width)
            && self.label_height.is_finite()
            && self.label_height >= 0.0
    }
}

/// Size of the week-row container.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RowSize {
    pub width: f32,
    pub height: f32,
}

impl RowSize {
    pub fn measure<P>(port: &P) -> Self
    where
        P: MeasurementPort + ?Sized,
    {
        Self {
            width: port.measure_row_width(),
            height: port.measure_row_height(),
        }
    }

    fn is_usable(&self) -> bool {
        self.width.is_finite() && self.width > 0.0 && self.height.is_finite() && self.height > 0.0
    }
}

/// Position of a segment as percentages of its week row.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SegmentGeometry {
    pub top_pct: f32,
    pub left_pct: f32,
    pub width_pct: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryMapper {
    metrics: ReferenceMetrics,
    row: RowSize,
}

impl GeometryMapper {
    pub fn new(metrics: ReferenceMetrics, row: RowSize) -> Self {
        Self { metrics, row }
    }

    pub fn from_port<P>(port: &P) -> Self
    where
        P: MeasurementPort + ?Sized,
    {
        Self::new(ReferenceMetrics::measure(port), RowSize::measure(port))
    }

    pub fn metrics(&self) -> ReferenceMetrics {
        self.metrics
    }

    /// False when the surface reported no usable geometry; nothing fits then.
    pub fn is_available(&self) -> bool {
        self.metrics.is_usable() && self.row.is_usable()
    }

    /// Half the slack between the column and its cell content, rounded down.
    pub fn padding(&self) -> f32 {
        ((self.metrics.column_height - self.metrics.cell_height) / 2.0)
            .floor()
            .max(0.0)
    }

    /// Top edge of lane 0.
    pub fn top_base(&self) -> f32 {
        TOP_OFFSET + self.padding() + self.metrics.label_height
    }

    /// Lowest pixel a segment may reach.
    pub fn bottom_border(&self) -> f32 {
        self.metrics.column_height - self.padding()
    }

    /// Distance between the tops of two adjacent lanes.
    pub fn pitch(segment_height: f32) -> f32 {
        segment_height + SEGMENT_GAP
    }

    /// Whether a segment of `segment_height` at `lane` stays above the bottom border.
    pub fn fits(&self, lane: usize, segment_height: f32) -> bool {
        if !self.is_available() || !(segment_height.is_finite() && segment_height > 0.0) {
            return false;
        }
        let bottom = self.top_base() + Self::pitch(segment_height) * (lane as f32 + 1.0) - SEGMENT_GAP;
        bottom <= self.bottom_border()
    }

    /// Percentage geometry of a segment at `lane` covering columns `start_col..=end_col`.
    pub fn place(
        &self,
        lane: usize,
        start_col: u32,
        end_col: u32,
        segment_height: f32,
    ) -> Option<SegmentGeometry> {
        if !self.is_available() {
            return None;
        }
        let padding = self.padding();
        let column_width = self.metrics.column_width;

        let top = self.top_base() + Self::pitch(segment_height) * lane as f32;
        let left = LEFT_OFFSET + padding + column_width * start_col as f32;
        let width = (end_col - start_col + 1) as f32 * column_width - padding * 3.0;

        Some(SegmentGeometry {
            top_pct: top / self.row.height * 100.0,
            left_pct: left / self.row.width * 100.0,
            width_pct: width / self.row.width * 100.0,
        })
    }
}

/// Capacity of a measured row, with each segment's own rendered height.
pub struct RowCapacity<'a, H> {
    mapper: &'a GeometryMapper,
    height_of: H,
}

impl<'a, H> RowCapacity<'a, H>
where
    H: Fn(&EventSegment) -> f32,
{
    pub fn new(mapper: &'a GeometryMapper, height_of: H) -> Self {
        Self { mapper, height_of }
    }
}

impl<H> LaneCapacity for RowCapacity<'_, H>
where
    H: Fn(&EventSegment) -> f32,
{
    fn fits(&self, segment: &EventSegment, lane: usize) -> bool {
        self.mapper.fits(lane, (self.height_of)(segment))
    }
}
