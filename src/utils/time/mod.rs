//! Wall-clock helpers for `"HH:MM"` strings.
//!
//! Block times are stored as plain 24-hour strings so that persisted data stays
//! human readable. These helpers convert them to minutes since midnight and back.
//! Conversion is lenient: a partially edited time never fails, it just maps to
//! fewer minutes.

use chrono::NaiveTime;

pub const MINUTES_PER_HOUR: i32 = 60;

/// Minutes since midnight for an `"HH:MM"` string.
///
/// Empty input is midnight (0). A component that does not parse counts as 0,
/// so `"08:"` is 480 and `"xx:30"` is 30. A total that does not fit in an
/// `i32` also counts as 0.
///
/// # Examples
/// ```
/// use shift_planner::utils::time::time_to_minutes;
///
/// assert_eq!(time_to_minutes("08:30"), 510);
/// assert_eq!(time_to_minutes(""), 0);
/// ```
pub fn time_to_minutes(hhmm: &str) -> i32 {
    let hhmm = hhmm.trim();
    if hhmm.is_empty() {
        return 0;
    }

    let mut parts = hhmm.splitn(2, ':');
    let hours = parse_component(parts.next());
    let minutes = parse_component(parts.next());
    hours
        .checked_mul(MINUTES_PER_HOUR)
        .and_then(|m| m.checked_add(minutes))
        .unwrap_or_else(|| {
            log::debug!("Time '{}' out of range, treating as midnight", hhmm);
            0
        })
}

fn parse_component(part: Option<&str>) -> i32 {
    part.and_then(|p| p.trim().parse::<i32>().ok()).unwrap_or(0)
}

/// Format minutes since midnight as a zero-padded `"HH:MM"` string.
///
/// No range clamping is done: 1500 formats as `"25:00"` and -30 as `"-1:30"`.
/// Callers that need a value inside the day clamp before calling.
pub fn minutes_to_time(minutes: i32) -> String {
    let hours = minutes.div_euclid(MINUTES_PER_HOUR);
    let mins = minutes.rem_euclid(MINUTES_PER_HOUR);
    format!("{:02}:{:02}", hours, mins)
}

/// Strictly parse an `"HH:MM"` string into a time of day.
pub fn parse_time(hhmm: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(hhmm.trim(), "%H:%M").ok()
}

/// Whether the string is a well-formed 24-hour `"HH:MM"` value.
pub fn is_valid_time(hhmm: &str) -> bool {
    let hhmm = hhmm.trim();
    hhmm.len() == 5 && parse_time(hhmm).is_some()
}
