//! JSON output formatting for habits.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::json;

use crate::core::format_day;
use crate::error::HabitsError;
use crate::features::stats::HabitStats;

/// Format the habit list with its statistics as JSON.
///
/// # Errors
///
/// Returns `HabitsError::Parse` if JSON serialization fails.
pub fn format_habits_json(stats: &[HabitStats], today: NaiveDate) -> Result<String, HabitsError> {
    let output = json!({
        "date": format_day(today),
        "count": stats.len(),
        "items": stats
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format any serializable value as pretty JSON.
///
/// # Errors
///
/// Returns `HabitsError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, HabitsError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::habits::{Completions, Habit, HabitId};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_habits_json() {
        let today = date(2024, 1, 3);
        let mut habit = Habit::new(HabitId(5), "Read", date(2024, 1, 1));
        habit.completions = Completions::from_iso_strs(["2024-01-02", "2024-01-03"]);
        let stats = vec![HabitStats::calculate(&habit, today)];

        let output = format_habits_json(&stats, today).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["date"], "2024-01-03");
        assert_eq!(parsed["count"], 1);
        assert_eq!(parsed["items"][0]["id"], 5);
        assert_eq!(parsed["items"][0]["name"], "Read");
        assert_eq!(parsed["items"][0]["currentStreak"], 2);
        assert_eq!(parsed["items"][0]["bestStreak"], 2);
        assert_eq!(parsed["items"][0]["weeklyRate"], 29);
        assert_eq!(parsed["items"][0]["completedToday"], true);
        assert_eq!(parsed["items"][0]["lastCompletion"], "2024-01-03");
    }

    #[test]
    fn test_format_empty_list() {
        let output = format_habits_json(&[], date(2024, 1, 3)).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["count"], 0);
        assert!(parsed["items"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_to_json_generic() {
        let habit = Habit::new(HabitId(1), "Stretch", date(2024, 1, 1));
        let result = to_json(&habit).unwrap();

        assert!(result.contains("\"name\": \"Stretch\""));
        assert!(result.contains("\"createdDate\": \"2024-01-01\""));
    }
}
