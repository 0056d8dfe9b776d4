//! Day and month label tables used by the title bar and the day header row.

const DAYS_FULL: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];
const DAYS_ABBR: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const MONTHS_FULL: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
const MONTHS_ABBR: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Day header labels, rotated so column 0 is `first_day_of_week` (0 = Sunday).
pub fn day_labels(abbreviated: bool, first_day_of_week: u8) -> Vec<&'static str> {
    let table = if abbreviated { &DAYS_ABBR } else { &DAYS_FULL };
    let start = first_day_of_week as usize % 7;
    (0..7).map(|i| table[(start + i) % 7]).collect()
}

/// Month name for a zero-based month index.
pub fn month_name(month0: u32, abbreviated: bool) -> &'static str {
    let table = if abbreviated { &MONTHS_ABBR } else { &MONTHS_FULL };
    table[month0 as usize % 12]
}

/// Title bar text, e.g. `Jan '25` or `January 2025`.
pub fn month_title(year: i32, month0: u32, abbr_month: bool, abbr_year: bool) -> String {
    let year_text = if abbr_year {
        format!("'{:02}", year.rem_euclid(100))
    } else {
        year.to_string()
    };
    format!("{} {}", month_name(month0, abbr_month), year_text)
}

/// Labels for the previous/next links. Always abbreviated, wrapping around the year.
pub fn neighbour_month_labels(month0: u32) -> (&'static str, &'static str) {
    let prev = (month0 + 11) % 12;
    let next = (month0 + 1) % 12;
    (month_name(prev, true), month_name(next, true))
}
