//! Add command for creating new tasks
//!
//! Implements the `tl add` command.

use clap::Args;
use tasklist_db::{DbError, Task, TaskRepository, TaskStore};

/// Create a new task
#[derive(Debug, Args)]
pub struct AddCommand {
    /// Title of the task
    #[arg(required = true)]
    pub title: String,
}

impl AddCommand {
    /// Execute the add command.
    ///
    /// Appends a new open task to the stored collection.
    ///
    /// # Errors
    ///
    /// Returns `DbError::ValidationError` if the title is empty or
    /// whitespace-only; nothing is written in that case.
    pub async fn execute<S: TaskStore>(&self, store: &S) -> Result<Task, DbError> {
        TaskRepository::new(store).create(&self.title).await
    }
}
