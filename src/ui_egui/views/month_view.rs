use std::collections::HashMap;

use egui::{Align2, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use super::utils::{
    contrast_text, format_event_tooltip, parse_color, truncate_single_line_to_width,
    DEFAULT_EVENT_COLOR,
};
use crate::services::calendar::Calendar;
use crate::services::surface::{RenderedSegment, SceneSurface, SurfaceMetrics};
use crate::ui_egui::theme::CalendarTheme;

/// Height of the day-name header row
const HEADER_HEIGHT: f32 = 24.0;
/// Gap between a column's border and its cell content, per side
const CELL_INSET: f32 = 2.0;
/// Vertical padding inside a segment, per side
const SEGMENT_PADDING: f32 = 1.0;
const MIN_ROW_HEIGHT: f32 = 60.0;
const DATE_FONT_SIZE: f32 = 13.0;
const SEGMENT_FONT_SIZE: f32 = 11.0;

/// What happened in the month view this frame
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MonthViewResponse {
    /// Day of the month whose cell was clicked
    pub clicked_day: Option<u32>,
    /// Event whose segment is under the pointer
    pub hovered_event: Option<usize>,
}

pub struct MonthView;

impl MonthView {
    /// Sizes the grid will have in the space left in `ui`.
    pub fn measure(ui: &egui::Ui, week_count: usize) -> SurfaceMetrics {
        let rows = if week_count == 0 { 6.0 } else { week_count as f32 };
        let available = ui.available_size();
        let column_width = (available.x / 7.0).floor().max(1.0);
        let column_height = ((available.y - HEADER_HEIGHT) / rows)
            .floor()
            .max(MIN_ROW_HEIGHT);

        let label_height = ui.fonts(|f| f.row_height(&FontId::proportional(DATE_FONT_SIZE)));
        let segment_text = ui.fonts(|f| f.row_height(&FontId::proportional(SEGMENT_FONT_SIZE)));

        SurfaceMetrics {
            cell_height: column_height - CELL_INSET * 2.0,
            column_height,
            column_width,
            label_height,
            segment_height: (segment_text + SEGMENT_PADDING * 2.0).ceil(),
        }
    }

    pub fn show(
        ui: &mut egui::Ui,
        calendar: &Calendar<SceneSurface>,
        theme: &CalendarTheme,
    ) -> MonthViewResponse {
        let mut response = MonthViewResponse::default();
        let surface = calendar.surface();
        let metrics = surface.metrics();
        let weeks = surface.weeks();

        let grid_size = Vec2::new(
            metrics.column_width * 7.0,
            HEADER_HEIGHT + metrics.column_height * weeks.len() as f32,
        );
        let (grid_rect, _) = ui.allocate_exact_size(grid_size, Sense::hover());
        let painter = ui.painter_at(grid_rect);
        painter.rect_filled(grid_rect, 0.0, theme.background);

        // Day-name header
        if let Some(labels) = surface.labels() {
            for (col, name) in labels.days.iter().enumerate() {
                let rect = Rect::from_min_size(
                    grid_rect.min + Vec2::new(metrics.column_width * col as f32, 0.0),
                    Vec2::new(metrics.column_width, HEADER_HEIGHT),
                );
                painter.text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    *name,
                    FontId::proportional(12.0),
                    theme.text,
                );
            }
        }

        let row_rect = |week: usize| {
            Rect::from_min_size(
                grid_rect.min
                    + Vec2::new(0.0, HEADER_HEIGHT + metrics.column_height * week as f32),
                Vec2::new(metrics.column_width * 7.0, metrics.column_height),
            )
        };
        let mut cells: HashMap<u32, Rect> = HashMap::new();

        for (week_index, week) in weeks.iter().enumerate() {
            let row = row_rect(week_index);
            for (col, cell) in week.cells.iter().enumerate() {
                let rect = Rect::from_min_size(
                    row.min + Vec2::new(metrics.column_width * col as f32, 0.0),
                    Vec2::new(metrics.column_width, metrics.column_height),
                );
                let Some(day) = cell.day else {
                    painter.rect_filled(rect, 0.0, theme.blank_background);
                    painter.rect_stroke(rect, 0.0, Stroke::new(0.5, theme.border));
                    continue;
                };

                let fill = if cell.disabled {
                    theme.disabled_background
                } else if cell.selected {
                    theme.selected_background
                } else {
                    theme.background
                };
                painter.rect_filled(rect, 0.0, fill);
                painter.rect_stroke(rect, 0.0, Stroke::new(0.5, theme.border));
                painter.text(
                    rect.min + Vec2::new(CELL_INSET + 3.0, CELL_INSET + 1.0),
                    Align2::LEFT_TOP,
                    day.to_string(),
                    FontId::proportional(DATE_FONT_SIZE),
                    if cell.disabled { theme.disabled_text } else { theme.text },
                );

                let cell_response = ui.interact(
                    rect,
                    ui.id().with(("month_day", day)),
                    if cell.disabled { Sense::hover() } else { Sense::click() },
                );
                if cell_response.clicked() {
                    response.clicked_day = Some(day);
                }
                cells.insert(day, rect);
            }
        }

        for rendered in surface.visible_segments() {
            let row = row_rect(rendered.segment.week);
            let Some(rect) = segment_rect(rendered, row, metrics.segment_height) else {
                continue;
            };
            let fill = parse_color(&rendered.style.color).unwrap_or(DEFAULT_EVENT_COLOR);
            painter.rect_filled(rect, 3.0, fill);

            let font = FontId::proportional(SEGMENT_FONT_SIZE);
            let text_color = contrast_text(fill);
            let max_width = rect.width() - 6.0;
            let text = if rendered.style.ellipsis {
                truncate_single_line_to_width(ui, &rendered.style.desc, &font, text_color, max_width)
            } else {
                rendered.style.desc.clone()
            };
            painter.with_clip_rect(rect.intersect(grid_rect)).text(
                Pos2::new(rect.left() + 3.0, rect.center().y),
                Align2::LEFT_CENTER,
                text,
                font,
                text_color,
            );

            let id = ui.id().with((
                "month_segment",
                rendered.segment.event,
                rendered.segment.week,
                rendered.segment.start_day,
            ));
            let hover = ui.interact(rect, id, Sense::hover());
            if hover.hovered() {
                response.hovered_event = Some(rendered.segment.event);
                if let Some(event) = calendar.event(rendered.segment.event) {
                    let _ = hover.on_hover_text(format_event_tooltip(event));
                }
            }
        }

        for (day, count) in surface.badges() {
            let Some(cell) = cells.get(day) else {
                continue;
            };
            let anchor = cell.right_bottom() - Vec2::new(CELL_INSET + 2.0, CELL_INSET + 1.0);
            let galley = painter.layout_no_wrap(
                format!("+{}", count),
                FontId::proportional(10.0),
                theme.badge_text,
            );
            let badge_size = galley.size() + Vec2::new(6.0, 2.0);
            let badge = Rect::from_min_size(anchor - badge_size, badge_size);
            painter.rect_filled(badge, 4.0, theme.badge_background);
            painter.galley(badge.min + Vec2::new(3.0, 1.0), galley, theme.badge_text);
        }

        response
    }
}

/// Screen rectangle of a placed segment inside its week row.
fn segment_rect(rendered: &RenderedSegment, row: Rect, height: f32) -> Option<Rect> {
    let geometry = rendered.geometry?;
    let min = row.min
        + Vec2::new(
            geometry.left_pct / 100.0 * row.width(),
            geometry.top_pct / 100.0 * row.height(),
        );
    Some(Rect::from_min_size(
        min,
        Vec2::new(geometry.width_pct / 100.0 * row.width(), height),
    ))
}
