// Test fixtures - reusable test data
// Calendars, dates and event drafts shared by the integration tests

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use month_grid::models::calendar_month::CalendarMonth;
use month_grid::models::event::EventDraft;
use month_grid::models::settings::CalendarConfig;
use month_grid::services::calendar::Calendar;
use month_grid::services::surface::{SceneSurface, SurfaceMetrics};

/// Sample dates for testing
pub mod dates {
    use super::*;

    pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    pub fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
        date(year, month, day).and_hms_opt(hour, 0, 0).unwrap()
    }

    /// A day of March 2025 at 09:00
    pub fn march(day: u32) -> NaiveDateTime {
        at(2025, 3, day, 9)
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    pub fn point(desc: &str, day: u32) -> EventDraft {
        EventDraft::point(desc, "#2a9d8f", dates::march(day))
    }

    /// A March 2025 span from `first` 09:00 to `last` 17:00
    pub fn span(desc: &str, first: u32, last: u32) -> EventDraft {
        EventDraft::span(
            desc,
            "#e76f51",
            dates::march(first),
            dates::at(2025, 3, last, 17),
        )
    }
}

/// Calendar on `month` drawing into a scene surface with `metrics`.
pub fn calendar_with(month: CalendarMonth, metrics: SurfaceMetrics) -> Calendar<SceneSurface> {
    Calendar::with_month(CalendarConfig::default(), SceneSurface::new(metrics), month).unwrap()
}

/// March 2025 with the default scene metrics, which fit three lanes per row.
///
/// 1 March 2025 is a Saturday, so the rows are [1], [2..8], [9..15],
/// [16..22], [23..29], [30, 31].
pub fn march_2025() -> Calendar<SceneSurface> {
    calendar_with(
        CalendarMonth::from_month1(2025, 3).unwrap(),
        SurfaceMetrics::default(),
    )
}
