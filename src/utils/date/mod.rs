// Date utility functions
// Day-record keys and the month grid shown by the calendar

use chrono::{Datelike, Duration, NaiveDate, Weekday};

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Storage key for a calendar date, e.g. `"2024-06-10"`.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key.trim(), DATE_KEY_FORMAT).ok()
}

pub fn is_sunday(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Sun
}

pub fn first_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

pub fn last_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1).and_then(|d| d.pred_opt())
}

/// Sunday-first grid of dates covering a month.
///
/// Leading cells are the last days of the previous month and trailing cells
/// the first days of the next, so the length is always a multiple of 7.
/// Returns an empty grid for an invalid month.
pub fn month_grid(year: i32, month: u32) -> Vec<NaiveDate> {
    let (first, last) = match (first_of_month(year, month), last_of_month(year, month)) {
        (Some(first), Some(last)) => (first, last),
        _ => return Vec::new(),
    };

    let lead = i64::from(first.weekday().num_days_from_sunday());
    let trail = i64::from(6 - last.weekday().num_days_from_sunday());
    let start = first - Duration::days(lead);
    let total = lead + i64::from(last.day()) + trail;

    (0..total).map(|i| start + Duration::days(i)).collect()
}

/// Keep `selected` when it lies in the displayed month, otherwise move to its first day.
pub fn clamp_to_month(selected: NaiveDate, year: i32, month: u32) -> NaiveDate {
    if selected.year() == year && selected.month() == month {
        return selected;
    }
    first_of_month(year, month).unwrap_or(selected)
}
