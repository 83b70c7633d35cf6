/// Basic unit tests to verify core functionality
use habit_board::*;
use chrono::{Duration, NaiveDate};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_habit_creation() {
    let habit = Habit::new(
        "Read".to_string(),
        Frequency::Daily,
        Some("20 pages before bed".to_string()),
    );

    assert_eq!(habit.name, "Read");
    assert_eq!(habit.frequency, Frequency::Daily);
    assert!(habit.completed_dates.is_empty());
}

#[test]
fn test_draft_validation() {
    assert!(HabitDraft::new("Read", Frequency::Daily).validate().is_ok());
    assert!(HabitDraft::new("", Frequency::Daily).validate().is_err());
    assert!(HabitDraft::new("   ", Frequency::Weekly).validate().is_err());
    assert!(HabitDraft::new("x".repeat(101), Frequency::Daily).validate().is_err());
}

#[test]
fn test_store_add_and_query() {
    let mut store = HabitStore::new();
    let id = store.add_habit(HabitDraft::new("Read", Frequency::Daily));

    let habits = &store.state().habits;
    assert_eq!(habits.len(), 1);
    assert_eq!(habits[0].id, id);
    assert!(habits[0].completed_dates.is_empty());
}

#[test]
fn test_store_toggle_involution() {
    let mut store = HabitStore::new();
    let id = store.add_habit(HabitDraft::new("Read", Frequency::Daily));
    let date = parse_day("2024-03-01").unwrap();

    store.toggle_habit(&id, date);
    store.toggle_habit(&id, date);
    assert!(store.state().habits[0].completed_dates.is_empty());
}

#[test]
fn test_streak_properties() {
    let today = day(2024, 3, 15);
    let mut habit = Habit::new("Read".to_string(), Frequency::Daily, None);

    // Run of 5 ending today
    for offset in 0..5 {
        habit.toggle(today - Duration::days(offset));
    }
    assert_eq!(current_streak(&habit.completed_dates, today), 5);

    // Losing today drops the live streak to zero, best run is unaffected
    habit.toggle(today);
    assert_eq!(current_streak(&habit.completed_dates, today), 0);
    assert_eq!(best_streak(&habit.completed_dates), 4);
}

#[test]
fn test_best_streak_documented_example() {
    let dates: std::collections::BTreeSet<NaiveDate> = [
        day(2024, 1, 1),
        day(2024, 1, 2),
        day(2024, 1, 3),
        day(2024, 1, 10),
    ]
    .into_iter()
    .collect();

    assert_eq!(best_streak(&dates), 3);
}

#[test]
fn test_weekly_rate_bounds() {
    let today = day(2024, 3, 15);
    assert_eq!(weekly_completion_rate(&[], today), 0);

    let mut habit = Habit::new("Read".to_string(), Frequency::Daily, None);
    for offset in 0..7 {
        habit.toggle(today - Duration::days(offset));
    }
    assert_eq!(weekly_completion_rate(&[habit], today), 100);
}

#[test]
fn test_seed_collection() {
    let habits = seed_habits();
    let names: Vec<&str> = habits.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, vec!["Read", "Exercise"]);
}
