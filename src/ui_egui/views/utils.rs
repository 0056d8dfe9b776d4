//! Common utility functions for the month view.
//!
//! Pure helpers for colour parsing, text clipping and tooltips.

use egui::Color32;

use crate::models::event::{Event, EventTiming};
use crate::ui_egui::theme::CalendarTheme;

/// Fallback fill for event colours that cannot be parsed.
pub const DEFAULT_EVENT_COLOR: Color32 = Color32::from_rgb(100, 150, 255);

const NAMED_COLORS: [(&str, Color32); 16] = [
    ("black", Color32::from_rgb(0, 0, 0)),
    ("white", Color32::from_rgb(255, 255, 255)),
    ("gray", Color32::from_rgb(128, 128, 128)),
    ("grey", Color32::from_rgb(128, 128, 128)),
    ("red", Color32::from_rgb(255, 0, 0)),
    ("maroon", Color32::from_rgb(128, 0, 0)),
    ("orange", Color32::from_rgb(255, 165, 0)),
    ("yellow", Color32::from_rgb(255, 255, 0)),
    ("green", Color32::from_rgb(0, 128, 0)),
    ("lime", Color32::from_rgb(0, 255, 0)),
    ("teal", Color32::from_rgb(0, 128, 128)),
    ("blue", Color32::from_rgb(0, 0, 255)),
    ("navy", Color32::from_rgb(0, 0, 128)),
    ("purple", Color32::from_rgb(128, 0, 128)),
    ("pink", Color32::from_rgb(255, 192, 203)),
    ("brown", Color32::from_rgb(165, 42, 42)),
];

/// Parse an event colour: `#RRGGBB`, `#RGB`, or a basic colour name.
///
/// # Returns
/// * `Some(Color32)` if parsing succeeds
/// * `None` if the input is empty or not recognised
pub fn parse_color(value: &str) -> Option<Color32> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Some((_, color)) = NAMED_COLORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(value))
    {
        return Some(*color);
    }

    CalendarTheme::hex_to_color(value).ok()
}

/// Black or white, whichever reads better on `fill`.
pub fn contrast_text(fill: Color32) -> Color32 {
    let luma = 0.299 * fill.r() as f32 + 0.587 * fill.g() as f32 + 0.114 * fill.b() as f32;
    if luma > 150.0 {
        Color32::BLACK
    } else {
        Color32::WHITE
    }
}

/// Cut `text` so that it plus a trailing ellipsis fits in `max_width`.
pub fn truncate_single_line_to_width(
    ui: &egui::Ui,
    text: &str,
    font_id: &egui::FontId,
    color: Color32,
    max_width: f32,
) -> String {
    if max_width <= 0.0 {
        return String::new();
    }

    let measure_width = |candidate: &str| {
        let layout_job = egui::text::LayoutJob::simple(
            candidate.to_string(),
            font_id.clone(),
            color,
            f32::INFINITY,
        );
        ui.fonts(|f| f.layout_job(layout_job).size().x)
    };

    if measure_width(text) <= max_width {
        return text.to_string();
    }

    let ellipsis = "…";
    if measure_width(ellipsis) > max_width {
        return String::new();
    }

    let mut char_boundaries: Vec<usize> = text.char_indices().map(|(idx, _)| idx).collect();
    char_boundaries.push(text.len());

    let mut low = 0usize;
    let mut high = char_boundaries.len().saturating_sub(1);

    while low < high {
        let mid = (low + high).div_ceil(2);
        let candidate = format!("{}{}", &text[..char_boundaries[mid]], ellipsis);

        if measure_width(&candidate) <= max_width {
            low = mid;
        } else {
            high = mid.saturating_sub(1);
        }
    }

    format!("{}{}", &text[..char_boundaries[low]], ellipsis)
}

/// Hover text for an event: description and its time or time range.
pub fn format_event_tooltip(event: &Event) -> String {
    let when = match event.timing() {
        EventTiming::Point(at) => at.format("%a %-d %b %Y, %H:%M").to_string(),
        EventTiming::Span { start, end } => format!(
            "{} – {}",
            start.format("%a %-d %b, %H:%M"),
            end.format("%a %-d %b %Y, %H:%M")
        ),
    };

    match event.kind() {
        Some(kind) if !kind.is_empty() => format!("{}\n{}\n{}", event.desc(), when, kind),
        _ => format!("{}\n{}", event.desc(), when),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::EventDraft;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_color_hex_and_names() {
        assert_eq!(parse_color("#FF5500"), Some(Color32::from_rgb(255, 85, 0)));
        assert_eq!(parse_color("00FF00"), Some(Color32::from_rgb(0, 255, 0)));
        assert_eq!(parse_color("Teal"), Some(Color32::from_rgb(0, 128, 128)));
    }

    #[test]
    fn test_parse_color_invalid() {
        assert!(parse_color("").is_none());
        assert!(parse_color("FF55").is_none());
        assert!(parse_color("GGGGGG").is_none());
        assert!(parse_color("rebeccapurple").is_none());
    }

    #[test]
    fn test_contrast_text() {
        assert_eq!(contrast_text(Color32::from_rgb(255, 255, 0)), Color32::BLACK);
        assert_eq!(contrast_text(Color32::from_rgb(0, 0, 128)), Color32::WHITE);
    }

    #[test]
    fn test_tooltip_for_span() {
        let day = |d| NaiveDate::from_ymd_opt(2025, 3, d).unwrap();
        let event = EventDraft::span(
            "Trip",
            "blue",
            day(6).and_hms_opt(8, 0, 0).unwrap(),
            day(11).and_hms_opt(18, 30, 0).unwrap(),
        )
        .kind("travel")
        .validate()
        .unwrap();

        assert_eq!(
            format_event_tooltip(&event),
            "Trip\nThu 6 Mar, 08:00 – Tue 11 Mar 2025, 18:30\ntravel"
        );
    }
}
