// Settings module
// Calendar configuration with every recognized option and its default

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::calendar_month::CalendarMonth;

/// Colour scheme of the calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// Calendar options.
///
/// Listeners (day click, hover, month change, pre-draw) are registered on the
/// calendar itself rather than carried here, so the configuration stays plain
/// data that can be loaded from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Abbreviated day names in the header row (`Sun` vs `Sunday`)
    pub abbr_day: bool,
    /// Abbreviated month name in the title (`Jan` vs `January`)
    pub abbr_month: bool,
    /// Two-digit year in the title (`'25` vs `2025`)
    pub abbr_year: bool,
    pub mode: ThemeMode,
    /// Initial month, 1-based. Defaults to the current month.
    pub month: Option<u32>,
    /// Initial year. Defaults to the current year.
    pub year: Option<i32>,
    /// Clip segment text with an ellipsis instead of wrapping
    pub ellipsis: bool,
    pub disabled_dates: Vec<NaiveDate>,
    /// 0 = Sunday, 1 = Monday, ...
    pub first_day_of_week: u8,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            abbr_day: true,
            abbr_month: true,
            abbr_year: true,
            mode: ThemeMode::Light,
            month: None,
            year: None,
            ellipsis: true,
            disabled_dates: Vec::new(),
            first_day_of_week: 0,
        }
    }
}

impl CalendarConfig {
    /// Check option ranges.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(month) = self.month {
            if !(1..=12).contains(&month) {
                return Err(format!("month must be between 1 and 12, got {}", month));
            }
        }

        if self.first_day_of_week > 6 {
            return Err(format!(
                "first_day_of_week must be between 0 (Sunday) and 6 (Saturday), got {}",
                self.first_day_of_week
            ));
        }

        Ok(())
    }

    /// The month to show first, filling unset fields from `today`.
    pub fn initial_month(&self, today: NaiveDate) -> CalendarMonth {
        let year = self.year.unwrap_or_else(|| today.year());
        self.month
            .and_then(|month| CalendarMonth::from_month1(year, month))
            .unwrap_or(CalendarMonth {
                year,
                month0: today.month0(),
            })
    }

    /// [`Self::initial_month`] relative to the local clock.
    pub fn initial_month_now(&self) -> CalendarMonth {
        self.initial_month(Local::now().date_naive())
    }
}
