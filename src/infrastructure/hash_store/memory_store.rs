//! Process-local hash store.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard};

use super::store::{ContentHashStore, HashStoreResult};
use async_trait::async_trait;
use tracing::debug;

/// In-memory hash sets keyed by page type.
///
/// Unbounded and never expiring. State is not shared between processes and
/// is lost on restart, so multi-instance deployments should configure
/// Redis instead.
#[derive(Default)]
pub struct InMemoryHashStore {
    sets: Mutex<HashMap<String, HashSet<String>>>,
}

impl InMemoryHashStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using InMemoryHashStore (duplicate hashes are process-local)");
        Self::default()
    }

    /// Number of hashes recorded for a page type.
    pub fn len(&self, page_type: &str) -> usize {
        self.lock().get(page_type).map_or(0, HashSet::len)
    }

    pub fn is_empty(&self) -> bool {
        self.lock().values().all(HashSet::is_empty)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, HashSet<String>>> {
        // A panic while holding the lock cannot leave a set half-updated.
        self.sets.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl ContentHashStore for InMemoryHashStore {
    async fn contains(&self, page_type: &str, hash: &str) -> HashStoreResult<bool> {
        Ok(self
            .lock()
            .get(page_type)
            .is_some_and(|set| set.contains(hash)))
    }

    async fn insert(&self, page_type: &str, hash: &str) -> HashStoreResult<bool> {
        Ok(self
            .lock()
            .entry(page_type.to_string())
            .or_default()
            .insert(hash.to_string()))
    }

    async fn clear(&self, page_type: &str) -> HashStoreResult<()> {
        self.lock().remove(page_type);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
