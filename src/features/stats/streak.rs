//! Streak and consistency calculations.
//!
//! All functions are pure over a completion set and, where needed, an
//! anchor day (normally today).

use chrono::{Duration, NaiveDate};

use crate::core::days_before;
use crate::habits::Completions;

/// Days in the rolling completion-rate window.
pub const WEEK_DAYS: u32 = 7;

/// Consecutive completed days ending at `anchor`.
///
/// If `anchor` itself is not completed the streak is counted from the day
/// before, so a run in progress is not broken until a full day is missed.
#[must_use]
pub fn current_streak(completions: &Completions, anchor: NaiveDate) -> u32 {
    let mut check_date = if completions.contains(anchor) {
        anchor
    } else {
        days_before(anchor, 1)
    };

    let mut streak = 0;
    while completions.contains(check_date) {
        streak += 1;
        check_date -= Duration::days(1);
    }
    streak
}

/// Longest run of consecutive completed days over all time.
#[must_use]
pub fn best_streak(completions: &Completions) -> u32 {
    let mut longest = 0;
    let mut streak = 0;
    let mut prev_date: Option<NaiveDate> = None;

    for date in completions.iter() {
        streak = match prev_date {
            Some(prev) if (date - prev).num_days() == 1 => streak + 1,
            _ => 1,
        };
        longest = longest.max(streak);
        prev_date = Some(date);
    }

    longest
}

/// Percentage of the seven days ending at `anchor` that were completed,
/// rounded to the nearest integer.
#[must_use]
pub fn weekly_completion_rate(completions: &Completions, anchor: NaiveDate) -> u8 {
    let completed = (0..i64::from(WEEK_DAYS))
        .filter(|&offset| completions.contains(days_before(anchor, offset)))
        .count();
    rounded_percent(completed, WEEK_DAYS as usize)
}

/// `round(100 * part / whole)` in integer arithmetic.
fn rounded_percent(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    let percent = (part * 200 + whole) / (whole * 2);
    u8::try_from(percent.min(100)).unwrap_or(100)
}
