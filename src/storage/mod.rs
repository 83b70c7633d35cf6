/// Storage layer for persisting the habit collection
///
/// This module defines the snapshot interface the store shadows its state
/// through, plus the JSON file implementation. Persistence is best-effort:
/// the store works correctly with an adapter that always loads empty.

pub mod json;

// Re-export the main storage types
pub use json::*;

use thiserror::Error;
use crate::domain::Habit;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Trait defining the snapshot interface for the habit collection
///
/// Implementations durably store the habit list across sessions. Only the
/// habits themselves are persisted; loading status and error banners are
/// transient and never written.
pub trait StateStore: Send {
    /// Overwrite the snapshot with the current collection
    fn save(&self, habits: &[Habit]) -> Result<(), StorageError>;

    /// Load the last saved collection; empty when no snapshot exists
    fn load(&self) -> Result<Vec<Habit>, StorageError>;
}
