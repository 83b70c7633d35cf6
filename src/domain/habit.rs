/// Habit entity and related functionality
///
/// This module defines the core Habit struct that represents a habit the
/// user wants to track, along with the draft type that carries form input
/// through validation.

use std::collections::BTreeSet;
use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};
use crate::domain::{DomainError, Frequency, HabitId};

/// A habit represents something the user wants to do regularly
///
/// This is the core entity in our system. Each habit has a name, a
/// frequency (how often it should be done), an optional description, and
/// the set of calendar days it was marked completed on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    /// Unique identifier for this habit
    pub id: HabitId,
    /// Display name (e.g., "Read", "Morning Run")
    pub name: String,
    /// How often this habit should be performed
    pub frequency: Frequency,
    /// Optional detailed description
    pub description: Option<String>,
    /// Days this habit was marked done on. A set: no duplicate days, and
    /// iteration is in calendar order regardless of toggle order.
    pub completed_dates: BTreeSet<NaiveDate>,
    /// When this habit was created (informational only)
    pub created_at: DateTime<Utc>,
}

impl Habit {
    /// Create a new habit with an empty completion set
    ///
    /// Name validation happens at the form boundary (see [`HabitDraft`]),
    /// not here: construction always succeeds.
    pub fn new(name: String, frequency: Frequency, description: Option<String>) -> Self {
        Self {
            id: HabitId::new(),
            name,
            frequency,
            description,
            completed_dates: BTreeSet::new(),
            created_at: Utc::now(),
        }
    }

    /// Check whether this habit was marked done on the given day
    pub fn is_completed_on(&self, date: NaiveDate) -> bool {
        self.completed_dates.contains(&date)
    }

    /// Toggle the completion mark for a day
    ///
    /// Removes the date if present, inserts it otherwise. Toggling the same
    /// date twice restores the set to its prior value. Returns true when
    /// the date is marked completed after the call.
    pub fn toggle(&mut self, date: NaiveDate) -> bool {
        if !self.completed_dates.remove(&date) {
            self.completed_dates.insert(date);
            true
        } else {
            false
        }
    }

    /// Total number of days this habit was completed
    pub fn total_completions(&self) -> usize {
        self.completed_dates.len()
    }
}

/// Form input for creating a habit, validated before dispatch
///
/// The store trusts its callers and never re-validates; this draft is the
/// creation boundary where a blank name blocks submission.
#[derive(Debug, Clone, Deserialize)]
pub struct HabitDraft {
    pub name: String,
    pub frequency: Frequency,
    pub description: Option<String>,
}

impl HabitDraft {
    pub fn new(name: impl Into<String>, frequency: Frequency) -> Self {
        Self {
            name: name.into(),
            frequency,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Validate the draft according to form rules
    ///
    /// The name must be non-empty after trimming. The stored name keeps its
    /// original whitespace; only the check trims.
    pub fn validate(&self) -> Result<(), DomainError> {
        let trimmed = self.name.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be empty".to_string()
            ));
        }

        if trimmed.len() > 100 {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be longer than 100 characters".to_string()
            ));
        }

        if let Some(desc) = &self.description {
            if desc.len() > 500 {
                return Err(DomainError::Validation {
                    message: "Description cannot be longer than 500 characters".to_string()
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_habit_starts_empty() {
        let habit = Habit::new("Read".to_string(), Frequency::Daily, None);

        assert_eq!(habit.name, "Read");
        assert!(habit.completed_dates.is_empty());
        assert_eq!(habit.total_completions(), 0);
    }

    #[test]
    fn test_toggle_is_an_involution() {
        let mut habit = Habit::new("Exercise".to_string(), Frequency::Daily, None);
        let before = habit.completed_dates.clone();

        assert!(habit.toggle(day(2024, 3, 1)));
        assert!(habit.is_completed_on(day(2024, 3, 1)));
        assert!(!habit.toggle(day(2024, 3, 1)));
        assert_eq!(habit.completed_dates, before);
    }

    #[test]
    fn test_toggle_keeps_dates_unique_and_sorted() {
        let mut habit = Habit::new("Read".to_string(), Frequency::Daily, None);
        habit.toggle(day(2024, 3, 3));
        habit.toggle(day(2024, 3, 1));
        habit.toggle(day(2024, 3, 2));
        habit.toggle(day(2024, 3, 1));
        habit.toggle(day(2024, 3, 1));

        let dates: Vec<NaiveDate> = habit.completed_dates.iter().copied().collect();
        assert_eq!(dates, vec![day(2024, 3, 1), day(2024, 3, 2), day(2024, 3, 3)]);
    }

    #[test]
    fn test_blank_draft_name_is_rejected() {
        let draft = HabitDraft::new("   ", Frequency::Daily);
        assert!(draft.validate().is_err());

        let draft = HabitDraft::new("Read", Frequency::Daily);
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_draft_keeps_original_name_whitespace() {
        let draft = HabitDraft::new("  Read  ", Frequency::Daily);
        assert!(draft.validate().is_ok());
        assert_eq!(draft.name, "  Read  ");
    }
}
