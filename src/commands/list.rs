//! List command for displaying tasks
//!
//! Implements the `tl list` command. By default shows the visible list,
//! newest first; `--all` shows the stored collection as is.

use clap::Args;
use tasklist_db::{DbError, Task, TaskRepository, TaskStore};

/// List tasks
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Show every stored task in creation order, including deleted ones
    #[arg(long)]
    pub all: bool,
}

impl ListCommand {
    /// Execute the list command.
    ///
    /// # Errors
    ///
    /// Returns `DbError::CorruptState` if the stored collection cannot be
    /// parsed.
    pub async fn execute<S: TaskStore>(&self, store: &S) -> Result<Vec<Task>, DbError> {
        let repo = TaskRepository::new(store);
        if self.all {
            repo.load_or_default().await
        } else {
            repo.visible().await
        }
    }
}
