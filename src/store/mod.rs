/// The habit store: single owner of the canonical collection
///
/// All mutations go through this module. Every state change notifies the
/// registered observers (the re-render trigger for whatever presentation
/// layer sits on top) and shadows the collection to the snapshot store.

pub mod handle;
pub mod remote;

pub use handle::StoreHandle;
pub use remote::{seed_habits, FetchError, RemoteClient};

use serde::Serialize;
use chrono::NaiveDate;

use crate::domain::{Habit, HabitDraft, HabitId};
use crate::storage::StateStore;

/// The canonical collection plus the status of the last fetch
///
/// `habits` keeps creation order. `is_loading` and `error` describe the most
/// recent fetch attempt and are never persisted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HabitState {
    pub habits: Vec<Habit>,
    pub is_loading: bool,
    pub error: Option<String>,
}

type Observer = Box<dyn Fn(&HabitState) + Send>;

/// Owner of the habit collection and the single point of mutation
///
/// The store trusts its callers: habit drafts are validated at the form
/// boundary before they arrive here, and mutations aimed at an unknown id
/// are silently ignored rather than treated as errors.
pub struct HabitStore {
    state: HabitState,
    adapter: Option<Box<dyn StateStore>>,
    observers: Vec<Observer>,
}

impl HabitStore {
    /// Create an empty store with no persistence
    pub fn new() -> Self {
        Self {
            state: HabitState::default(),
            adapter: None,
            observers: Vec::new(),
        }
    }

    /// Create a store seeded from a snapshot adapter
    ///
    /// The snapshot is loaded once, before any other operation. A missing
    /// or unreadable snapshot degrades to the empty collection with a
    /// warning; persistence problems never surface to callers.
    pub fn restore(adapter: Box<dyn StateStore>) -> Self {
        let habits = match adapter.load() {
            Ok(habits) => habits,
            Err(e) => {
                tracing::warn!("Failed to load habit snapshot, starting empty: {}", e);
                Vec::new()
            }
        };

        tracing::info!("Restored {} habits from snapshot", habits.len());

        Self {
            state: HabitState {
                habits,
                ..HabitState::default()
            },
            adapter: Some(adapter),
            observers: Vec::new(),
        }
    }

    /// Current state, for queries and rendering
    pub fn state(&self) -> &HabitState {
        &self.state
    }

    /// Register an observer called after every state change
    pub fn subscribe(&mut self, observer: impl Fn(&HabitState) + Send + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Append a new habit to the collection
    ///
    /// Always succeeds: the habit gets a fresh id, an empty completion set,
    /// and `created_at` = now.
    pub fn add_habit(&mut self, draft: HabitDraft) -> HabitId {
        let habit = Habit::new(draft.name, draft.frequency, draft.description);
        let id = habit.id.clone();

        tracing::debug!("Added habit: {} ({})", habit.name, id.to_string());
        self.state.habits.push(habit);
        self.after_change();

        id
    }

    /// Toggle a habit's completion mark for a day
    ///
    /// An unknown id is a no-op, not an error.
    pub fn toggle_habit(&mut self, id: &HabitId, date: NaiveDate) {
        match self.state.habits.iter_mut().find(|h| &h.id == id) {
            Some(habit) => {
                let completed = habit.toggle(date);
                tracing::debug!(
                    "Toggled habit {} for {}: now {}",
                    id.to_string(),
                    date,
                    if completed { "completed" } else { "not completed" }
                );
                self.after_change();
            }
            None => {
                tracing::debug!("Toggle ignored, no habit with id {}", id.to_string());
            }
        }
    }

    /// Remove a habit from the collection entirely
    ///
    /// No tombstone, no undo. An unknown id leaves the collection unchanged.
    pub fn remove_habit(&mut self, id: &HabitId) {
        let before = self.state.habits.len();
        self.state.habits.retain(|h| &h.id != id);

        if self.state.habits.len() != before {
            tracing::debug!("Removed habit {}", id.to_string());
            self.after_change();
        } else {
            tracing::debug!("Remove ignored, no habit with id {}", id.to_string());
        }
    }

    /// Mark a fetch as pending
    ///
    /// Only the status flag changes here, so observers are notified but
    /// nothing is persisted.
    pub fn begin_fetch(&mut self) {
        self.state.is_loading = true;
        self.notify();
    }

    /// Apply a fetch resolution
    ///
    /// Success replaces the collection wholesale and clears any stale error;
    /// edits made while the fetch was pending are lost. Failure keeps the
    /// collection at its last known value and records the message for the
    /// error banner. When fetches overlap, whichever resolution lands last
    /// wins - there is no reordering guarantee.
    pub fn finish_fetch(&mut self, result: Result<Vec<Habit>, FetchError>) {
        self.state.is_loading = false;

        match result {
            Ok(habits) => {
                tracing::debug!("Fetch resolved with {} habits, replacing collection", habits.len());
                self.state.habits = habits;
                self.state.error = None;
            }
            Err(e) => {
                tracing::debug!("Fetch rejected: {}", e);
                self.state.error = Some(e.to_string());
            }
        }

        self.after_change();
    }

    /// Shadow the collection to the snapshot store and notify observers
    ///
    /// Persistence is fire-and-forget: a failed save is logged and
    /// otherwise invisible.
    fn after_change(&self) {
        if let Some(adapter) = &self.adapter {
            if let Err(e) = adapter.save(&self.state.habits) {
                tracing::warn!("Failed to save habit snapshot: {}", e);
            }
        }
        self.notify();
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer(&self.state);
        }
    }
}

impl Default for HabitStore {
    fn default() -> Self {
        Self::new()
    }
}
