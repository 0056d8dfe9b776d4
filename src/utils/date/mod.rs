// Date utility functions
// Wall-clock day boundaries and month arithmetic shared by the layout engine

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

/// First instant of `date` (00:00:00).
pub fn morning(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Last whole second of `date` (23:59:59).
pub fn night(date: NaiveDate) -> NaiveDateTime {
    // 23:59:59 is always a valid wall-clock time
    date.and_time(NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN))
}

/// Whether the interval `[start, end]` touches the day range `[from, to]`.
///
/// The interval touches when it starts inside the range, ends inside the range,
/// or starts before the first morning and ends after the last night.
pub fn touches_range(start: NaiveDateTime, end: NaiveDateTime, from: NaiveDate, to: NaiveDate) -> bool {
    let morn = morning(from);
    let night = night(to);

    let starts_inside = start >= morn && start <= night;
    let ends_inside = end >= morn && end <= night;
    let continues_through = start < morn && end > night;

    starts_inside || ends_inside || continues_through
}

/// Whether the interval `[start, end]` touches the single day `date`.
pub fn touches_day(start: NaiveDateTime, end: NaiveDateTime, date: NaiveDate) -> bool {
    touches_range(start, end, date, date)
}

/// Number of days in a month. `month` is 1-based.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}

/// Format a date as `M/D/YYYY` without leading zeroes.
///
/// Disabled dates are compared through this string form so equality does not
/// depend on the time of day carried by the original value.
pub fn format_mdy(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}
