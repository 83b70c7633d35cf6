/// Shared handle over the habit store
///
/// Mutations are synchronous and atomic with respect to each other: every
/// call takes the lock, applies, and releases. The only suspension point is
/// the remote fetch, which is awaited with the lock released so that edits
/// made during the pending window still go through - and are then
/// overwritten by the resolution, preserving the last-resolved-wins
/// behavior the store documents.

use std::sync::{Arc, Mutex, MutexGuard};
use chrono::NaiveDate;

use crate::domain::{Habit, HabitDraft, HabitId};
use crate::store::{FetchError, HabitState, HabitStore, RemoteClient};

/// Clone-able handle sharing one [`HabitStore`]
#[derive(Clone)]
pub struct StoreHandle {
    inner: Arc<Mutex<HabitStore>>,
}

impl StoreHandle {
    pub fn new(store: HabitStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HabitStore> {
        // Poisoning means a panic mid-mutation; nothing sensible to recover.
        self.inner.lock().expect("habit store lock poisoned")
    }

    /// Append a new habit; see [`HabitStore::add_habit`]
    pub fn add_habit(&self, draft: HabitDraft) -> HabitId {
        self.lock().add_habit(draft)
    }

    /// Toggle a completion mark; unknown ids are ignored
    pub fn toggle_habit(&self, id: &HabitId, date: NaiveDate) {
        self.lock().toggle_habit(id, date)
    }

    /// Remove a habit; unknown ids are ignored
    pub fn remove_habit(&self, id: &HabitId) {
        self.lock().remove_habit(id)
    }

    /// Register an observer called after every state change
    pub fn subscribe(&self, observer: impl Fn(&HabitState) + Send + 'static) {
        self.lock().subscribe(observer)
    }

    /// Clone of the current state
    pub fn snapshot(&self) -> HabitState {
        self.lock().state().clone()
    }

    /// Run a fetch against the remote and apply its resolution
    ///
    /// Marks the store pending, awaits the client without holding the lock,
    /// then applies the result and returns the fetched collection. A second
    /// fetch may start while this one is pending; whichever resolves later
    /// overwrites the collection.
    pub async fn fetch_habits(&self, client: &RemoteClient) -> Result<Vec<Habit>, FetchError> {
        self.lock().begin_fetch();
        let result = client.fetch_habits().await;
        self.lock().finish_fetch(result.clone());
        result
    }
}
