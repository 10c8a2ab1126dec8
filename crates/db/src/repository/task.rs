//! Task repository for the persisted task collection
//!
//! The whole collection lives as one JSON array under [`TASK_ARRAY_KEY`].
//! Every mutating operation loads the full collection, changes it in memory
//! and writes it back with a single `set`, so a failure at any step leaves
//! the previously persisted collection untouched.

use crate::error::{DbError, DbResult};
use crate::id::IdGenerator;
use crate::models::Task;
use crate::repository::filter::derive_visible_list;
use crate::repository::validation::validate_title;
use crate::store::TaskStore;
use tracing::{debug, trace, warn};

/// Store key holding the serialized task collection
pub const TASK_ARRAY_KEY: &str = "@task_array";

/// Repository for the task collection
///
/// Borrows any [`TaskStore`]; holds no state of its own, so every call
/// observes the effects of the calls before it.
pub struct TaskRepository<'a, S: TaskStore> {
    store: &'a S,
}

impl<'a, S: TaskStore> TaskRepository<'a, S> {
    /// Create a new TaskRepository over the given store
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Load the stored collection.
    ///
    /// # Returns
    ///
    /// `None` if the collection key has never been written (or the store was
    /// reset). This is distinct from `Some(vec![])`.
    ///
    /// # Errors
    ///
    /// Returns `DbError::CorruptState` if the stored value is not a valid
    /// task array. The stored value is left as is.
    pub async fn load(&self) -> DbResult<Option<Vec<Task>>> {
        let Some(raw) = self.store.get(TASK_ARRAY_KEY).await? else {
            debug!("No task collection stored yet");
            return Ok(None);
        };

        let tasks: Vec<Task> = serde_json::from_str(&raw).map_err(|e| {
            warn!("Stored task collection failed to parse: {}", e);
            DbError::CorruptState {
                key: TASK_ARRAY_KEY.to_string(),
                source: e,
            }
        })?;
        debug!("Loaded {} tasks", tasks.len());
        Ok(Some(tasks))
    }

    /// Load the stored collection, treating an absent key as empty.
    pub async fn load_or_default(&self) -> DbResult<Vec<Task>> {
        Ok(self.load().await?.unwrap_or_default())
    }

    /// Load the collection and derive the visible list from it.
    pub async fn visible(&self) -> DbResult<Vec<Task>> {
        let tasks = self.load_or_default().await?;
        Ok(derive_visible_list(&tasks))
    }

    /// Create a new task and append it to the collection.
    ///
    /// The title is stored exactly as given. If no collection exists yet,
    /// one is started with this task as its only element.
    ///
    /// # Errors
    ///
    /// Returns `DbError::ValidationError` for an empty or whitespace-only
    /// title, before the store is touched.
    pub async fn create(&self, title: &str) -> DbResult<Task> {
        validate_title(title)?;

        let mut tasks = self.load_or_default().await?;
        let id = unique_id(title, &tasks)?;
        debug!("Creating task: {} with title: {}", id, title);

        let task = Task::new(id, title);
        tasks.push(task.clone());
        self.persist(&tasks).await?;

        Ok(task)
    }

    /// Mark every task with the given id as completed.
    ///
    /// # Returns
    ///
    /// The number of tasks that matched. Zero is not an error: nothing is
    /// written and the call succeeds.
    pub async fn mark_completed(&self, id: &str) -> DbResult<usize> {
        debug!("Marking task completed: {}", id);
        self.update_matching(id, Task::complete).await
    }

    /// Tombstone every task with the given id.
    ///
    /// The task stays in the stored collection and disappears from the
    /// visible list. Returns the number of tasks that matched.
    pub async fn soft_delete(&self, id: &str) -> DbResult<usize> {
        debug!("Soft deleting task: {}", id);
        self.update_matching(id, Task::delete).await
    }

    /// Clear the entire store.
    ///
    /// This removes every key, including the user profile. There is no
    /// partial clear and no undo. A later [`load`](Self::load) returns `None`.
    pub async fn reset_all(&self) -> DbResult<()> {
        warn!("Clearing all stored data");
        self.store.clear().await
    }

    /// Apply `apply` to every task whose id matches, then persist.
    async fn update_matching(&self, id: &str, apply: impl Fn(&mut Task)) -> DbResult<usize> {
        let Some(mut tasks) = self.load().await? else {
            debug!("No task collection; nothing matches {}", id);
            return Ok(0);
        };

        let mut matched = 0;
        for task in tasks.iter_mut().filter(|t| t.id == id) {
            apply(task);
            matched += 1;
        }

        if matched == 0 {
            debug!("Task not found: {}", id);
            return Ok(0);
        }
        if matched > 1 {
            warn!("{} tasks share id {}; updated all of them", matched, id);
        }

        self.persist(&tasks).await?;
        Ok(matched)
    }

    /// Serialize and write the whole collection in one `set`.
    async fn persist(&self, tasks: &[Task]) -> DbResult<()> {
        let value = serde_json::to_string(tasks).map_err(|e| DbError::Encode {
            key: TASK_ARRAY_KEY.to_string(),
            source: e,
        })?;
        trace!("Persisting {} tasks ({} bytes)", tasks.len(), value.len());
        self.store.set(TASK_ARRAY_KEY, &value).await
    }
}

/// Pick an id not already used by any task in `existing`.
fn unique_id(title: &str, existing: &[Task]) -> DbResult<String> {
    let mut generator = IdGenerator::new(title);
    pick_unused(std::iter::from_fn(|| generator.next_id()), existing)
}

/// First candidate not used by any task in `existing`.
fn pick_unused(
    candidates: impl IntoIterator<Item = String>,
    existing: &[Task],
) -> DbResult<String> {
    let mut attempts = 0;
    for id in candidates {
        attempts += 1;
        if !existing.iter().any(|t| t.id == id) {
            return Ok(id);
        }
        debug!("Generated id {} already in use, retrying", id);
    }

    Err(DbError::IdExhausted { attempts })
}
