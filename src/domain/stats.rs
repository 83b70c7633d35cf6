/// Aggregate statistics across the habit collection
///
/// These functions back the dashboard view: the weekly completion rate,
/// per-day history strips, and the headline counters. Like the streak
/// functions they are pure and take the reference day from the caller.

use serde::Serialize;
use chrono::{Duration, NaiveDate};
use crate::domain::{streak, Frequency, Habit};

/// Weekly completion rate across all habits, as a whole percentage
///
/// Looks at the 7 days ending at `today` inclusive. Every daily habit
/// contributes one possible slot per day; a weekly habit contributes a slot
/// only on its anchor day. The result is `round(100 * completed / possible)`,
/// or 0 when nothing was possible (no habits, or a window without an anchor
/// day for a weekly-only collection).
pub fn weekly_completion_rate(habits: &[Habit], today: NaiveDate) -> u32 {
    let mut completed = 0u32;
    let mut possible = 0u32;

    for offset in 0..7 {
        let day = today - Duration::days(offset);

        for habit in habits {
            if habit.frequency.is_expected_on(day) {
                possible += 1;
                if habit.is_completed_on(day) {
                    completed += 1;
                }
            }
        }
    }

    if possible == 0 {
        return 0;
    }

    ((completed as f64 / possible as f64) * 100.0).round() as u32
}

/// One day in a habit's recent history
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayStatus {
    pub date: NaiveDate,
    pub completed: bool,
}

/// The trailing 7 days of a habit, oldest first
pub fn completion_history(habit: &Habit, today: NaiveDate) -> Vec<DayStatus> {
    (0..7)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset);
            DayStatus {
                date,
                completed: habit.is_completed_on(date),
            }
        })
        .collect()
}

/// Headline counters for the statistics panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_habits: usize,
    pub daily_habits: usize,
    pub weekly_habits: usize,
    /// Habits marked done on the reference day
    pub completed_today: usize,
    /// The longest streak currently alive across all habits
    pub longest_streak: u32,
    /// Rounded mean of the current streaks
    pub average_streak: u32,
    pub weekly_completion_rate: u32,
}

impl DashboardStats {
    /// Compute all counters from the collection
    pub fn compute(habits: &[Habit], today: NaiveDate) -> Self {
        let current_streaks: Vec<u32> = habits
            .iter()
            .map(|h| streak::current_streak(&h.completed_dates, today))
            .collect();

        let average_streak = if habits.is_empty() {
            0
        } else {
            let sum: u32 = current_streaks.iter().sum();
            (sum as f64 / habits.len() as f64).round() as u32
        };

        Self {
            total_habits: habits.len(),
            daily_habits: habits.iter().filter(|h| h.frequency == Frequency::Daily).count(),
            weekly_habits: habits.iter().filter(|h| h.frequency == Frequency::Weekly).count(),
            completed_today: habits.iter().filter(|h| h.is_completed_on(today)).count(),
            longest_streak: current_streaks.iter().copied().max().unwrap_or(0),
            average_streak,
            weekly_completion_rate: weekly_completion_rate(habits, today),
        }
    }
}
