//! Theme module for the egui month grid
//!
//! Maps the configured light/dark mode onto the colours used when painting
//! the grid, plus hex conversion helpers for event colours.

use egui::Color32;

use crate::models::settings::ThemeMode;

/// Colours used to paint the month grid
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Application and grid background
    pub background: Color32,

    /// Text of titles, day labels and date numbers
    pub text: Color32,

    /// Cell borders and grid lines
    pub border: Color32,

    /// Fill of cells outside the month
    pub blank_background: Color32,

    /// Fill and text of disabled days
    pub disabled_background: Color32,
    pub disabled_text: Color32,

    /// Fill of selected days
    pub selected_background: Color32,

    /// "+N" overflow badge
    pub badge_background: Color32,
    pub badge_text: Color32,
}

impl CalendarTheme {
    pub fn light() -> Self {
        Self {
            is_dark: false,
            background: Color32::WHITE,
            text: Color32::BLACK,
            border: Color32::BLACK,
            blank_background: Color32::from_rgb(240, 240, 240),
            disabled_background: Color32::from_rgb(225, 225, 225),
            disabled_text: Color32::from_rgb(150, 150, 150),
            selected_background: Color32::from_rgb(210, 228, 255),
            badge_background: Color32::from_rgb(90, 90, 90),
            badge_text: Color32::WHITE,
        }
    }

    pub fn dark() -> Self {
        Self {
            is_dark: true,
            background: Color32::from_rgb(0x2A, 0x2A, 0x2A),
            text: Color32::WHITE,
            border: Color32::from_rgb(0xC8, 0xC8, 0xC8),
            blank_background: Color32::from_rgb(0x22, 0x22, 0x22),
            disabled_background: Color32::from_rgb(0x3A, 0x3A, 0x3A),
            disabled_text: Color32::from_rgb(120, 120, 120),
            selected_background: Color32::from_rgb(50, 60, 80),
            badge_background: Color32::from_rgb(0xC8, 0xC8, 0xC8),
            badge_text: Color32::from_rgb(0x2A, 0x2A, 0x2A),
        }
    }

    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.background;
        visuals.panel_fill = self.background;
        visuals.override_text_color = Some(self.text);

        ctx.set_visuals(visuals);
    }

    /// Parse `#RRGGBB` or `#RGB` (the `#` is optional) to Color32
    pub fn hex_to_color(hex: &str) -> Result<Color32, String> {
        let hex = hex.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return Err(format!("Invalid hex color: {}", hex));
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| format!("Invalid hex color: {}", hex));
        match hex.len() {
            6 => Ok(Color32::from_rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                let short = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
                Ok(Color32::from_rgb(short(0)?, short(1)?, short(2)?))
            }
            _ => Err("Hex color must be 3 or 6 characters".to_string()),
        }
    }
}
