//! User profile repository
//!
//! The profile is a single display name stored as a plain string, separate
//! from the task collection. Its absence is what triggers the first-run
//! name prompt.

use crate::error::DbResult;
use crate::store::TaskStore;
use tracing::debug;

/// Store key holding the user's display name
pub const NAME_KEY: &str = "@name";

/// Repository for the user profile
pub struct ProfileRepository<'a, S: TaskStore> {
    store: &'a S,
}

impl<'a, S: TaskStore> ProfileRepository<'a, S> {
    /// Create a new ProfileRepository over the given store
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// The stored name, or `None` if none has been set
    pub async fn name(&self) -> DbResult<Option<String>> {
        self.store.get(NAME_KEY).await
    }

    /// Whether the first-run name prompt is needed.
    ///
    /// True exactly when the name key is absent. An empty stored name
    /// counts as set.
    pub async fn needs_name(&self) -> DbResult<bool> {
        Ok(self.name().await?.is_none())
    }

    /// Persist the display name. No validation is applied.
    pub async fn set_name(&self, name: &str) -> DbResult<()> {
        debug!("Setting profile name");
        self.store.set(NAME_KEY, name).await
    }
}
