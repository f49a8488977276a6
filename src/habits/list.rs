//! The ordered habit list and its mutations.
//!
//! Every mutation returns a new list; callers persist the result as a
//! whole, mirroring how the list is stored as a single entry.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::HabitsError;

use super::{Habit, HabitId};

/// An ordered sequence of habits, in creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HabitList {
    habits: Vec<Habit>,
}

impl HabitList {
    /// An empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { habits: Vec::new() }
    }

    /// Habits in display order.
    #[must_use]
    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    /// Number of habits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.habits.len()
    }

    /// Whether the list holds no habits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }

    /// Look up a habit by id.
    #[must_use]
    pub fn get(&self, id: HabitId) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    /// Resolve a command-line selector to a habit.
    ///
    /// A selector is a numeric id or a case-insensitive exact name.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when nothing matches and `InvalidInput` when a
    /// name matches more than one habit.
    pub fn find(&self, selector: &str) -> Result<&Habit, HabitsError> {
        let selector = selector.trim();

        if let Ok(raw) = selector.parse::<i64>() {
            if let Some(habit) = self.get(HabitId(raw)) {
                return Ok(habit);
            }
        }

        let wanted = selector.to_lowercase();
        let mut matches = self
            .habits
            .iter()
            .filter(|h| h.name.to_lowercase() == wanted);

        match (matches.next(), matches.next()) {
            (Some(habit), None) => Ok(habit),
            (Some(_), Some(_)) => Err(HabitsError::InvalidInput(format!(
                "'{selector}' matches more than one habit, use its id instead"
            ))),
            (None, _) => Err(HabitsError::NotFound(format!("Habit '{selector}'"))),
        }
    }

    /// Append a new habit created on `today`.
    ///
    /// The id is `now_millis`, or the next id above the largest existing
    /// one if that timestamp is already taken. When the largest id is
    /// `i64::MAX`, the smallest unused positive id is taken instead.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the trimmed name is empty or no id is free.
    pub fn add(
        &self,
        name: &str,
        today: NaiveDate,
        now_millis: i64,
    ) -> Result<(Self, HabitId), HabitsError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(HabitsError::InvalidInput("habit name cannot be empty".to_string()));
        }

        let id = if self.get(HabitId(now_millis)).is_some() {
            self.next_free_id(now_millis)?
        } else {
            HabitId(now_millis)
        };

        let mut habits = self.habits.clone();
        habits.push(Habit::new(id, name, today));
        debug!(%id, name, "added habit");

        Ok((Self { habits }, id))
    }

    fn next_free_id(&self, taken: i64) -> Result<HabitId, HabitsError> {
        let max = self.habits.iter().map(|h| h.id.0).max().unwrap_or(taken);
        max.checked_add(1)
            .or_else(|| (1..=i64::MAX).find(|&raw| self.get(HabitId(raw)).is_none()))
            .map(HabitId)
            .ok_or_else(|| HabitsError::InvalidInput("no free habit id left".to_string()))
    }

    /// Toggle `today` in the completions of habit `id`.
    ///
    /// Returns the new list and whether the habit is now completed today.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no habit has that id.
    pub fn toggle(&self, id: HabitId, today: NaiveDate) -> Result<(Self, bool), HabitsError> {
        let mut habits = self.habits.clone();
        let habit = habits
            .iter_mut()
            .find(|h| h.id == id)
            .ok_or_else(|| HabitsError::NotFound(format!("Habit {id}")))?;

        let completed = habit.completions.toggle(today);
        debug!(%id, %today, completed, "toggled completion");

        Ok((Self { habits }, completed))
    }

    /// Remove habit `id` and everything recorded for it.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no habit has that id.
    pub fn delete(&self, id: HabitId) -> Result<Self, HabitsError> {
        if self.get(id).is_none() {
            return Err(HabitsError::NotFound(format!("Habit {id}")));
        }

        let habits = self.habits.iter().filter(|h| h.id != id).cloned().collect();
        debug!(%id, "deleted habit");

        Ok(Self { habits })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> HabitList {
        let today = date(2024, 6, 10);
        let (list, _) = HabitList::new().add("Read", today, 100).unwrap();
        let (list, _) = list.add("Meditate", today, 200).unwrap();
        list
    }

    #[test]
    fn test_add_trims_and_appends() {
        let (list, id) = HabitList::new().add("  Read  ", date(2024, 6, 10), 42).unwrap();
        assert_eq!(id, HabitId(42));
        assert_eq!(list.len(), 1);

        let habit = &list.habits()[0];
        assert_eq!(habit.name, "Read");
        assert_eq!(habit.created_date, date(2024, 6, 10));
        assert!(habit.completions.is_empty());
    }

    #[test]
    fn test_add_rejects_blank_name() {
        let result = HabitList::new().add("   ", date(2024, 6, 10), 1);
        assert!(matches!(result, Err(HabitsError::InvalidInput(_))));
    }

    #[test]
    fn test_add_avoids_id_collision() {
        let list = sample();
        let (list, id) = list.add("Run", date(2024, 6, 10), 100).unwrap();
        assert_eq!(id, HabitId(201));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_add_collision_at_max_id_stays_unique() {
        let today = date(2024, 6, 10);
        let (list, _) = HabitList::new().add("A", today, 100).unwrap();
        let (list, _) = list.add("B", today, i64::MAX).unwrap();

        let (list, id) = list.add("C", today, 100).unwrap();
        assert_eq!(id, HabitId(1));

        let mut ids: Vec<_> = list.habits().iter().map(|h| h.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_add_leaves_original_untouched() {
        let list = sample();
        let (updated, _) = list.add("Run", date(2024, 6, 10), 300).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(updated.len(), 3);
    }

    #[test]
    fn test_toggle_is_idempotent_in_pairs() {
        let list = sample();
        let today = date(2024, 6, 11);

        let (once, completed) = list.toggle(HabitId(100), today).unwrap();
        assert!(completed);
        assert!(once.get(HabitId(100)).unwrap().is_completed_on(today));
        assert!(!once.get(HabitId(200)).unwrap().is_completed_on(today));

        let (twice, completed) = once.toggle(HabitId(100), today).unwrap();
        assert!(!completed);
        assert_eq!(twice, list);
    }

    #[test]
    fn test_toggle_unknown_habit() {
        let result = sample().toggle(HabitId(999), date(2024, 6, 11));
        assert!(matches!(result, Err(HabitsError::NotFound(_))));
    }

    #[test]
    fn test_delete() {
        let list = sample().delete(HabitId(100)).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.habits()[0].name, "Meditate");

        let result = list.delete(HabitId(100));
        assert!(matches!(result, Err(HabitsError::NotFound(_))));
    }

    #[test]
    fn test_find_by_id_and_name() {
        let list = sample();
        assert_eq!(list.find("200").unwrap().name, "Meditate");
        assert_eq!(list.find("read").unwrap().id, HabitId(100));
        assert!(matches!(list.find("Swim"), Err(HabitsError::NotFound(_))));
    }

    #[test]
    fn test_find_folds_non_ascii_case() {
        let (list, _) = HabitList::new().add("Étirements", date(2024, 6, 10), 1).unwrap();
        assert_eq!(list.find("étirements").unwrap().id, HabitId(1));
        assert_eq!(list.find("ÉTIREMENTS").unwrap().id, HabitId(1));
    }

    #[test]
    fn test_find_ambiguous_name() {
        let (list, _) = sample().add("READ", date(2024, 6, 10), 300).unwrap();
        assert!(matches!(list.find("read"), Err(HabitsError::InvalidInput(_))));
        assert_eq!(list.find("300").unwrap().name, "READ");
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let json = serde_json::to_string(&HabitList::new()).unwrap();
        assert_eq!(json, "[]");
    }
}
