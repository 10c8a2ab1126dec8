//! Delete command for removing tasks from the list
//!
//! Implements the `tl delete` command. Deletion is a tombstone: the task
//! stays in storage and no longer shows up in `tl list`.

use clap::Args;
use tasklist_db::{DbError, TaskRepository, TaskStore};

/// Delete a task (it stays in storage, hidden from the list)
#[derive(Debug, Args)]
pub struct DeleteCommand {
    /// Task ID to delete
    #[arg(required = true)]
    pub id: String,
}

/// Result of the delete command execution
#[derive(Debug, PartialEq, Eq)]
pub struct DeleteResult {
    /// The task ID that was requested
    pub id: String,
    /// How many stored tasks carried that id
    pub matched: usize,
}

impl std::fmt::Display for DeleteResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.matched == 0 {
            write!(f, "No task found with id '{}'", self.id)
        } else {
            write!(f, "Deleted task: {}", self.id)
        }
    }
}

impl DeleteCommand {
    /// Execute the delete command.
    pub async fn execute<S: TaskStore>(&self, store: &S) -> Result<DeleteResult, DbError> {
        let matched = TaskRepository::new(store).soft_delete(&self.id).await?;
        Ok(DeleteResult {
            id: self.id.clone(),
            matched,
        })
    }
}
