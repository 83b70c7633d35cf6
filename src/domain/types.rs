/// Core types and enums used throughout the domain layer
///
/// This module defines the fundamental types like HabitId and Frequency
/// that are used by the Habit entity and the statistics functions.

use serde::{Deserialize, Serialize};
use chrono::{Datelike, NaiveDate, Weekday};
use uuid::Uuid;

/// Unique identifier for a habit
///
/// This is a wrapper around UUID to provide type safety - a habit id is
/// assigned once at creation time and stays stable for the habit's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HabitId(pub Uuid);

impl HabitId {
    /// Generate a new random habit ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a habit ID from a string (useful when loading a snapshot)
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }

    /// Convert to string representation
    pub fn to_string(&self) -> String {
        self.0.to_string()
    }
}

impl Default for HabitId {
    fn default() -> Self {
        Self::new()
    }
}

/// How often a habit should be performed
///
/// Daily habits expect a completion every calendar day. Weekly habits are
/// only counted on the weekly anchor day (Sunday), which matches how the
/// completion-rate window treats them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// Every single day
    Daily,
    /// Once per week, counted on the anchor day
    Weekly,
}

/// Parse a calendar day from its canonical `YYYY-MM-DD` form
///
/// All dates crossing the API boundary as text come through here, so that
/// membership checks against a completion set compare normalized days.
pub fn parse_day(s: &str) -> Result<NaiveDate, crate::domain::DomainError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| crate::domain::DomainError::InvalidDate(
            format!("Expected YYYY-MM-DD, got '{}'", s)
        ))
}

impl Frequency {
    /// Get the display name for this frequency
    pub fn display_name(&self) -> &str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
        }
    }

    /// Parse a frequency from its display form
    pub fn parse(s: &str) -> Result<Self, crate::domain::DomainError> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            other => Err(crate::domain::DomainError::InvalidFrequency(
                format!("Invalid frequency '{}'. Valid options: daily, weekly", other)
            )),
        }
    }

    /// Check if this frequency expects the habit to be done on a given date
    ///
    /// Weekly habits are anchored to Sunday: a completion slot exists only
    /// when the date falls on that weekday.
    pub fn is_expected_on(&self, date: NaiveDate) -> bool {
        match self {
            Frequency::Daily => true,
            Frequency::Weekly => date.weekday() == Weekday::Sun,
        }
    }
}
