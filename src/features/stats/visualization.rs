//! Terminal visualization for habit statistics.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::core::window_ending;

const FULL_BLOCK: char = '█';
const EMPTY_BLOCK: char = '░';
const DONE_MARK: char = '■';
const MISSED_MARK: char = '·';

/// Render a row of weekday initials above completion marks.
///
/// `days` holds one flag per day, oldest first, ending at `end`.
///
/// # Returns
///
/// A two-line string, e.g.
///
/// ```text
/// T F S S M T W
/// ■ ■ · ■ ■ · ■
/// ```
#[must_use]
pub fn render_week_strip(days: &[bool], end: NaiveDate) -> String {
    if days.is_empty() {
        return String::new();
    }

    let len = u32::try_from(days.len()).unwrap_or(u32::MAX);
    let labels: Vec<String> = window_ending(end, len)
        .into_iter()
        .map(|day| weekday_initial(day).to_string())
        .collect();
    let marks: Vec<String> = days
        .iter()
        .map(|&done| if done { DONE_MARK } else { MISSED_MARK }.to_string())
        .collect();

    format!("{}\n{}", labels.join(" "), marks.join(" "))
}

fn weekday_initial(day: NaiveDate) -> char {
    match day.weekday() {
        Weekday::Mon => 'M',
        Weekday::Tue | Weekday::Thu => 'T',
        Weekday::Wed => 'W',
        Weekday::Fri => 'F',
        Weekday::Sat | Weekday::Sun => 'S',
    }
}

/// Render a percentage as a fixed-width bar.
#[must_use]
pub fn render_progress_bar(percent: u8, width: usize) -> String {
    let percent = percent.min(100);
    let filled = usize::from(percent) * width / 100;
    let empty = width - filled;

    format!(
        "[{}{}] {}%",
        FULL_BLOCK.to_string().repeat(filled),
        EMPTY_BLOCK.to_string().repeat(empty),
        percent
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_week_strip() {
        // 2024-01-07 is a Sunday.
        let end = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        let strip = render_week_strip(&[true, true, false, true, false, false, true], end);
        assert_eq!(strip, "M T W T F S S\n■ ■ · ■ · · ■");
    }

    #[test]
    fn test_render_week_strip_empty() {
        let end = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        assert_eq!(render_week_strip(&[], end), "");
    }

    #[test]
    fn test_render_progress_bar() {
        assert_eq!(render_progress_bar(0, 10), "[░░░░░░░░░░] 0%");
        assert_eq!(render_progress_bar(50, 10), "[█████░░░░░] 50%");
        assert_eq!(render_progress_bar(100, 4), "[████] 100%");
        assert_eq!(render_progress_bar(29, 10), "[██░░░░░░░░] 29%");
    }
}
