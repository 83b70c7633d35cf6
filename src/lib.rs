/// Public library interface for the habit board
///
/// This module wires the habit store to its snapshot persistence and
/// exports the domain types and statistics functions a front end needs.

use std::path::PathBuf;
use thiserror::Error;

// Internal modules
mod domain;
mod storage;
mod store;

// Re-export public modules and types
pub use domain::*;
pub use storage::{JsonFileStore, StateStore, StorageError};
pub use store::{seed_habits, FetchError, HabitState, HabitStore, RemoteClient, StoreHandle};

/// Errors that can surface through the application layer
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Domain validation error: {0}")]
    Domain(#[from] DomainError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),
}

/// The assembled habit board: store plus snapshot persistence
///
/// Construction restores the last saved collection before any other
/// operation runs, then hands out a shared store handle for mutations and
/// queries.
pub struct HabitBoard {
    store: StoreHandle,
}

impl HabitBoard {
    /// Create a board backed by a JSON snapshot at the given path
    pub fn new(data_path: PathBuf) -> Result<Self, AppError> {
        tracing::info!("Initializing habit board with snapshot: {:?}", data_path);

        let adapter = JsonFileStore::new(data_path)?;
        let store = HabitStore::restore(Box::new(adapter));

        Ok(Self {
            store: StoreHandle::new(store),
        })
    }

    /// Create a board with no persistence (state dies with the process)
    pub fn in_memory() -> Self {
        Self {
            store: StoreHandle::new(HabitStore::new()),
        }
    }

    /// The shared store handle (mutations, queries, subscriptions)
    pub fn store(&self) -> &StoreHandle {
        &self.store
    }

    /// Validate a draft at the creation boundary, then add it
    ///
    /// This is where a blank name blocks submission; past this point the
    /// store trusts its input.
    pub fn add_habit(&self, draft: HabitDraft) -> Result<HabitId, AppError> {
        draft.validate()?;
        Ok(self.store.add_habit(draft))
    }

    /// Refresh the collection from the remote
    ///
    /// Replaces the collection wholesale on success; on failure the
    /// collection keeps its last known value and the state carries the
    /// error message.
    pub async fn sync(&self) -> Result<(), AppError> {
        self.store.fetch_habits(&RemoteClient::default()).await?;
        Ok(())
    }
}
