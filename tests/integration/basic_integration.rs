/// Basic integration tests
use habit_board::*;
use chrono::NaiveDate;
use std::time::Duration;
use tempfile::TempDir;

fn snapshot_path(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("habits.json")
}

#[test]
fn test_board_basic_workflow() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let board = HabitBoard::new(snapshot_path(&dir)).expect("Failed to create board");

    // A blank name is blocked at the creation boundary
    let rejected = board.add_habit(HabitDraft::new("  ", Frequency::Daily));
    assert!(rejected.is_err());
    assert!(board.store().snapshot().habits.is_empty());

    let id = board
        .add_habit(HabitDraft::new("Read", Frequency::Daily).with_description("20 pages"))
        .expect("Failed to add habit");

    let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    board.store().toggle_habit(&id, date);

    let state = board.store().snapshot();
    assert_eq!(state.habits.len(), 1);
    assert!(state.habits[0].is_completed_on(date));
}

#[test]
fn test_snapshot_persistence_across_reopen() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = snapshot_path(&dir);
    let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

    {
        let board = HabitBoard::new(path.clone()).expect("Failed to create first board");
        let id = board
            .add_habit(HabitDraft::new("Read", Frequency::Daily))
            .unwrap();
        board
            .add_habit(HabitDraft::new("Review", Frequency::Weekly))
            .unwrap();
        board.store().toggle_habit(&id, date);
    }

    // A second board on the same path sees the saved collection
    let board = HabitBoard::new(path).expect("Failed to create second board");
    let state = board.store().snapshot();

    assert_eq!(state.habits.len(), 2);
    assert_eq!(state.habits[0].name, "Read");
    assert!(state.habits[0].is_completed_on(date));
    assert_eq!(state.habits[1].frequency, Frequency::Weekly);
    assert!(!state.is_loading);
    assert!(state.error.is_none());
}

#[tokio::test]
async fn test_sync_replaces_collection_wholesale() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let board = HabitBoard::new(snapshot_path(&dir)).expect("Failed to create board");

    board
        .add_habit(HabitDraft::new("Meditate", Frequency::Daily))
        .unwrap();

    let client = RemoteClient::new(Duration::ZERO);
    board.store().fetch_habits(&client).await.expect("Fetch failed");

    // The manually added habit is gone: resolution is a replacement, not a merge
    let names: Vec<String> = board
        .store()
        .snapshot()
        .habits
        .into_iter()
        .map(|h| h.name)
        .collect();
    assert_eq!(names, vec!["Read", "Exercise"]);
}

#[tokio::test]
async fn test_synced_collection_is_persisted() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = snapshot_path(&dir);

    {
        let board = HabitBoard::new(path.clone()).expect("Failed to create board");
        let client = RemoteClient::new(Duration::ZERO);
        board.store().fetch_habits(&client).await.expect("Fetch failed");
    }

    let board = HabitBoard::new(path).expect("Failed to reopen board");
    assert_eq!(board.store().snapshot().habits.len(), 2);
}

#[test]
fn test_fetch_rejection_keeps_last_known_collection() {
    let mut store = HabitStore::new();
    store.add_habit(HabitDraft::new("Read", Frequency::Daily));

    store.begin_fetch();
    assert!(store.state().is_loading);

    store.finish_fetch(Err(FetchError::Remote("service unavailable".to_string())));

    let state = store.state();
    assert!(!state.is_loading);
    assert_eq!(state.habits.len(), 1);
    assert!(state.error.as_deref().unwrap().contains("service unavailable"));
}

#[test]
fn test_storage_interface() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = JsonFileStore::new(snapshot_path(&dir)).expect("Failed to create storage");

    // Test that the JSON store implements the StateStore trait
    let _: &dyn StateStore = &store;
    assert!(store.load().unwrap().is_empty());
}
