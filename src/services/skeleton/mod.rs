//! Month skeleton builder.
//!
//! Lays a month out as week rows of exactly 7 cells, padding before day 1 and
//! after the last day with blank cells.

use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;

use crate::models::calendar_month::CalendarMonth;
use crate::models::grid::{DayCell, WeekRow};
use crate::utils::date::format_mdy;

/// Dates that render greyed out and ignore clicks.
///
/// Stored in `M/D/YYYY` form so two values naming the same calendar day are
/// always equal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisabledDates {
    dates: BTreeSet<String>,
}

impl DisabledDates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a date. Returns `false` if it was already disabled.
    pub fn insert(&mut self, date: NaiveDate) -> bool {
        self.dates.insert(format_mdy(date))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&format_mdy(date))
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl FromIterator<NaiveDate> for DisabledDates {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        let mut disabled = Self::new();
        for date in iter {
            disabled.insert(date);
        }
        disabled
    }
}

/// The week/day layout of one month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthSkeleton {
    pub month: CalendarMonth,
    /// Column of day 1 (0 = the configured first day of the week).
    pub first_column: u32,
    pub last_day: u32,
    pub weeks: Vec<WeekRow>,
}

impl MonthSkeleton {
    /// Week index and column of `day`.
    pub fn locate(&self, day: u32) -> Option<(usize, u32)> {
        if day == 0 || day > self.last_day {
            return None;
        }
        let offset = self.first_column + day - 1;
        Some(((offset / 7) as usize, offset % 7))
    }

    pub fn cell(&self, day: u32) -> Option<&DayCell> {
        let (week, col) = self.locate(day)?;
        self.weeks.get(week).map(|row| &row.cells[col as usize])
    }

    pub fn cell_mut(&mut self, day: u32) -> Option<&mut DayCell> {
        let (week, col) = self.locate(day)?;
        self.weeks.get_mut(week).map(|row| &mut row.cells[col as usize])
    }
}

/// Build the skeleton of `month`.
///
/// `first_day_of_week` is 0 for Sunday through 6 for Saturday.
pub fn build_skeleton(
    month: CalendarMonth,
    first_day_of_week: u8,
    disabled: &DisabledDates,
) -> MonthSkeleton {
    let last_day = month.last_day();
    let first_column = month
        .date(1)
        .map(|first| {
            (first.weekday().num_days_from_sunday() + 7 - u32::from(first_day_of_week % 7)) % 7
        })
        .unwrap_or(0);

    let total_cells = first_column + last_day;
    let week_count = total_cells.div_ceil(7) as usize;

    let mut weeks = Vec::with_capacity(week_count);
    for index in 0..week_count {
        let cells: [DayCell; 7] = std::array::from_fn(|col| {
            let offset = (index * 7 + col) as u32;
            if offset < first_column || offset >= first_column + last_day {
                return DayCell::blank();
            }
            let day = offset - first_column + 1;
            let is_disabled = month.date(day).is_some_and(|date| disabled.contains(date));
            DayCell::in_month(day, is_disabled)
        });
        weeks.push(WeekRow {
            index,
            cells,
            segments: Vec::new(),
        });
    }

    MonthSkeleton {
        month,
        first_column,
        last_day,
        weeks,
    }
}
