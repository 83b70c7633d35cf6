/// Mock remote source for the habit collection
///
/// There is no real backend: a fetch sleeps for a fixed delay and resolves
/// to a small seed collection, which is enough to exercise the pending,
/// fulfilled, and rejected paths of the store.

use std::time::Duration;
use thiserror::Error;

use crate::domain::{Frequency, Habit};

/// Delay the mock remote waits before resolving
pub const FETCH_DELAY: Duration = Duration::from_millis(1000);

/// A fetch failure, carrying the user-visible message
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("Failed to fetch habits: {0}")]
    Remote(String),
}

/// The collection a successful fetch resolves to
///
/// Two daily habits with no completions, freshly minted ids each time.
pub fn seed_habits() -> Vec<Habit> {
    vec![
        Habit::new("Read".to_string(), Frequency::Daily, None),
        Habit::new("Exercise".to_string(), Frequency::Daily, None),
    ]
}

/// Client for the simulated remote
///
/// The delay is injectable so tests do not have to wait a real second.
#[derive(Debug, Clone)]
pub struct RemoteClient {
    delay: Duration,
}

impl RemoteClient {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Fetch the habit collection from the mock remote
    pub async fn fetch_habits(&self) -> Result<Vec<Habit>, FetchError> {
        tokio::time::sleep(self.delay).await;
        Ok(seed_habits())
    }
}

impl Default for RemoteClient {
    fn default() -> Self {
        Self::new(FETCH_DELAY)
    }
}
