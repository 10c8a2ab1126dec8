//! Key-value store contract
//!
//! Everything tasklist persists goes through [`TaskStore`]: opaque string
//! keys mapped to string values. The durable implementation lives on
//! [`crate::Database`]; [`MemoryStore`] keeps the same contract in process.

use crate::error::DbResult;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::trace;

/// Async key-value persistence used by the repositories
///
/// Each call is atomic per key from the caller's point of view.
#[allow(async_fn_in_trait)]
pub trait TaskStore {
    /// Read the value stored under `key`.
    ///
    /// Returns `Ok(None)` when the key was never written (or was cleared).
    /// Errors only on storage faults.
    async fn get(&self, key: &str) -> DbResult<Option<String>>;

    /// Persist `value` under `key`, replacing any prior value.
    async fn set(&self, key: &str, value: &str) -> DbResult<()>;

    /// Remove every key.
    async fn clear(&self) -> DbResult<()>;
}

#[derive(Debug, Default)]
struct MemoryState {
    entries: HashMap<String, String>,
    writes: usize,
}

/// In-process [`TaskStore`] backed by a `HashMap`
///
/// Nothing survives the process. Useful for embedding the repositories
/// without a database directory, and for tests that need to count writes.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `set` and `clear` calls so far
    pub fn write_count(&self) -> usize {
        self.lock().writes
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        // The map is always left consistent, so a poisoned lock is still usable
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TaskStore for MemoryStore {
    async fn get(&self, key: &str) -> DbResult<Option<String>> {
        trace!("memory get: {}", key);
        Ok(self.lock().entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> DbResult<()> {
        trace!("memory set: {} ({} bytes)", key, value.len());
        let mut state = self.lock();
        state.entries.insert(key.to_string(), value.to_string());
        state.writes += 1;
        Ok(())
    }

    async fn clear(&self) -> DbResult<()> {
        trace!("memory clear");
        let mut state = self.lock();
        state.entries.clear();
        state.writes += 1;
        Ok(())
    }
}
