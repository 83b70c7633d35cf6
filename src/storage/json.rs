/// JSON file implementation of the snapshot interface
///
/// The whole collection is written as one self-describing document on every
/// save. This matches the small data volume: a habit list is a few kilobytes
/// even after years of completions.

use std::fs;
use std::path::PathBuf;
use serde::{Deserialize, Serialize};

use crate::domain::Habit;
use crate::storage::{StateStore, StorageError};

/// On-disk layout of the snapshot file
///
/// Habits are kept in collection order; `is_loading` and `error` have no
/// business here.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedState {
    habits: Vec<Habit>,
}

/// File-backed snapshot store
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a snapshot store at the given path
    ///
    /// The parent directory is created if missing; the file itself appears
    /// on the first save.
    pub fn new(path: PathBuf) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        tracing::info!("JSON snapshot store initialized at: {:?}", path);
        Ok(Self { path })
    }

    /// Path of the snapshot file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl StateStore for JsonFileStore {
    fn save(&self, habits: &[Habit]) -> Result<(), StorageError> {
        let state = PersistedState {
            habits: habits.to_vec(),
        };
        let json = serde_json::to_string_pretty(&state)?;
        fs::write(&self.path, json)?;

        tracing::debug!("Saved {} habits to {:?}", habits.len(), self.path);
        Ok(())
    }

    fn load(&self) -> Result<Vec<Habit>, StorageError> {
        if !self.path.exists() {
            tracing::debug!("No snapshot at {:?}, starting empty", self.path);
            return Ok(Vec::new());
        }

        let json = fs::read_to_string(&self.path)?;
        let state: PersistedState = serde_json::from_str(&json)?;

        tracing::debug!("Loaded {} habits from {:?}", state.habits.len(), self.path);
        Ok(state.habits)
    }
}
