// Calendar month module
// The (year, month) currently displayed and month navigation

use chrono::{Datelike, NaiveDate};

use crate::utils::date::days_in_month;

/// A displayed month. `month0` is zero-based (0 = January).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarMonth {
    pub year: i32,
    pub month0: u32,
}

impl CalendarMonth {
    /// Create a month from a zero-based month index.
    ///
    /// Returns `None` when `month0` is not in `0..=11`.
    pub fn new(year: i32, month0: u32) -> Option<Self> {
        (month0 < 12).then_some(Self { year, month0 })
    }

    /// Create a month from a 1-based month number, as shown to users.
    pub fn from_month1(year: i32, month1: u32) -> Option<Self> {
        month1.checked_sub(1).and_then(|m| Self::new(year, m))
    }

    /// 1-based month number.
    pub fn month1(&self) -> u32 {
        self.month0 + 1
    }

    /// The following month; December wraps to January of the next year.
    pub fn next(self) -> Self {
        if self.month0 == 11 {
            Self {
                year: self.year + 1,
                month0: 0,
            }
        } else {
            Self {
                year: self.year,
                month0: self.month0 + 1,
            }
        }
    }

    /// The preceding month; January wraps to December of the previous year.
    pub fn previous(self) -> Self {
        if self.month0 == 0 {
            Self {
                year: self.year - 1,
                month0: 11,
            }
        } else {
            Self {
                year: self.year,
                month0: self.month0 - 1,
            }
        }
    }

    /// Number of days in the month.
    pub fn last_day(&self) -> u32 {
        days_in_month(self.year, self.month1())
    }

    /// The date of `day` within this month, if it exists.
    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month1(), day)
    }

    /// Whether `date` falls inside this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month0
    }
}
