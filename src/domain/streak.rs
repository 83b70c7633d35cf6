/// Streak calculation over a habit's completion set
///
/// The functions here are pure: the reference day is always supplied by the
/// caller, so the same inputs yield the same outputs in tests and in the UI.

use std::collections::BTreeSet;
use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use crate::domain::Habit;

/// Count consecutive completed days ending at `today`
///
/// Walks backward one calendar day at a time and stops at the first gap.
/// A missing `today` yields 0 even when an unbroken run ends yesterday -
/// the streak only counts while it is alive today. The completion set is
/// finite, so the walk needs no history cap.
pub fn current_streak(dates: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut day = today;

    while dates.contains(&day) {
        streak += 1;
        match day.pred_opt() {
            Some(prev) => day = prev,
            None => break,
        }
    }

    streak
}

/// Length of the longest consecutive run anywhere in the set
///
/// Scans the dates in ascending order; a run continues when a date is
/// exactly one day after its predecessor. Returns 0 for an empty set.
pub fn best_streak(dates: &BTreeSet<NaiveDate>) -> u32 {
    let mut best = 0;
    let mut run = 0;
    let mut prev: Option<NaiveDate> = None;

    for &date in dates {
        run = match prev {
            Some(p) if p.succ_opt() == Some(date) => run + 1,
            _ => 1,
        };
        best = best.max(run);
        prev = Some(date);
    }

    best
}

/// Streak statistics for a single habit
///
/// This is the per-habit card data: the live streak, the best run on
/// record, and completion totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreakSummary {
    /// Current consecutive days completed, ending today
    pub current: u32,
    /// Best streak ever achieved for this habit
    pub best: u32,
    /// Total number of days this habit has been completed
    pub total_completions: u32,
    /// When the habit was last completed (None if never completed)
    pub last_completed: Option<NaiveDate>,
}

impl StreakSummary {
    /// Calculate the summary for a habit relative to a reference day
    pub fn for_habit(habit: &Habit, today: NaiveDate) -> Self {
        let current = current_streak(&habit.completed_dates, today);
        let best = best_streak(&habit.completed_dates);

        Self {
            current,
            best: best.max(current),
            total_completions: habit.completed_dates.len() as u32,
            last_completed: habit.completed_dates.iter().next_back().copied(),
        }
    }
}
