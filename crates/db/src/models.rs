//! Data models for tasklist
//!
//! Defines the task record exactly as it is persisted inside the
//! `@task_array` JSON blob.

use serde::{Deserialize, Serialize};

/// A single task in the collection
///
/// Serialized as `{"id", "title", "isCompleted", "deleted"}`. All four keys
/// are required when reading a stored collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Identifier assigned at creation, never changed afterwards
    pub id: String,

    /// User-entered text
    pub title: String,

    /// Completion flag; only ever goes from false to true
    pub is_completed: bool,

    /// Soft-delete tombstone; once set it stays set
    pub deleted: bool,
}

impl Task {
    /// Create a new, open task with the given id and title
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            is_completed: false,
            deleted: false,
        }
    }

    /// Mark this task as completed
    pub fn complete(&mut self) {
        self.is_completed = true;
    }

    /// Tombstone this task
    pub fn delete(&mut self) {
        self.deleted = true;
    }

    /// Returns true if this task shows up in the visible list
    pub fn is_visible(&self) -> bool {
        !self.deleted
    }
}
