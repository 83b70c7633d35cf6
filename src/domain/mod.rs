/// Domain module containing core business logic and data types
///
/// This module defines the Habit entity and the pure statistics functions
/// (streaks, weekly completion rate) that derive display metrics from it.

pub mod habit;
pub mod streak;
pub mod stats;
pub mod types;

// Re-export public types for easy access
pub use habit::*;
pub use streak::{best_streak, current_streak, StreakSummary};
pub use stats::{completion_history, weekly_completion_rate, DashboardStats, DayStatus};
pub use types::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid habit name: {0}")]
    InvalidHabitName(String),

    #[error("Invalid frequency: {0}")]
    InvalidFrequency(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}
