//! Calendar-day helpers.
//!
//! Completions are stored as `YYYY-MM-DD` strings and compared as
//! [`NaiveDate`] values, so no time-of-day component ever takes part in
//! a comparison.

use chrono::{Duration, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

/// Storage format for calendar days.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Strict shape check; chrono alone accepts unpadded months and days.
static ISO_DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap_or_else(|e| panic!("Invalid date regex: {e}"))
});

/// Parse a strictly formatted `YYYY-MM-DD` calendar day.
///
/// Returns `None` for anything else, including impossible dates such as
/// `2024-02-30`.
#[must_use]
pub fn parse_day(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if !ISO_DATE_PATTERN.is_match(input) {
        return None;
    }
    NaiveDate::parse_from_str(input, ISO_DATE_FORMAT).ok()
}

/// Format a calendar day as `YYYY-MM-DD`.
#[must_use]
pub fn format_day(day: NaiveDate) -> String {
    day.format(ISO_DATE_FORMAT).to_string()
}

/// The day `days` calendar days before `day`.
#[must_use]
pub fn days_before(day: NaiveDate, days: i64) -> NaiveDate {
    day - Duration::days(days)
}

/// The `len` calendar days ending at `end` (inclusive), oldest first.
#[must_use]
pub fn window_ending(end: NaiveDate, len: u32) -> Vec<NaiveDate> {
    (0..i64::from(len))
        .rev()
        .map(|offset| days_before(end, offset))
        .collect()
}

/// Long header form, e.g. `Monday, October 19, 2026`.
#[must_use]
pub fn format_long(day: NaiveDate) -> String {
    day.format("%A, %B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_day_valid() {
        assert_eq!(parse_day("2024-01-15"), Some(date(2024, 1, 15)));
        assert_eq!(parse_day(" 2024-02-29 "), Some(date(2024, 2, 29)));
    }

    #[test]
    fn test_parse_day_rejects_malformed() {
        assert_eq!(parse_day("2024-1-5"), None);
        assert_eq!(parse_day("2023-02-29"), None);
        assert_eq!(parse_day("2024-13-01"), None);
        assert_eq!(parse_day("2024-01-15T10:00:00"), None);
        assert_eq!(parse_day(""), None);
        assert_eq!(parse_day("yesterday"), None);
    }

    #[test]
    fn test_format_day() {
        assert_eq!(format_day(date(2024, 3, 7)), "2024-03-07");
    }

    #[test]
    fn test_days_before_crosses_month_and_year() {
        assert_eq!(days_before(date(2024, 3, 1), 1), date(2024, 2, 29));
        assert_eq!(days_before(date(2024, 1, 1), 1), date(2023, 12, 31));
    }

    #[test]
    fn test_window_ending() {
        let window = window_ending(date(2024, 1, 3), 7);
        assert_eq!(window.len(), 7);
        assert_eq!(window[0], date(2023, 12, 28));
        assert_eq!(window[6], date(2024, 1, 3));
    }

    #[test]
    fn test_format_long() {
        assert_eq!(format_long(date(2026, 10, 19)), "Monday, October 19, 2026");
        assert_eq!(format_long(date(2024, 1, 5)), "Friday, January 5, 2024");
    }
}
