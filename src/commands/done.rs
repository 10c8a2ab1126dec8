//! Done command for completing tasks
//!
//! Implements the `tl done` command to mark a task as completed.

use clap::Args;
use tasklist_db::{DbError, TaskRepository, TaskStore};

/// Mark a task as completed
#[derive(Debug, Args)]
pub struct DoneCommand {
    /// Task ID to complete
    #[arg(required = true)]
    pub id: String,
}

/// Result of the done command execution
#[derive(Debug, PartialEq, Eq)]
pub struct DoneResult {
    /// The task ID that was requested
    pub id: String,
    /// How many stored tasks carried that id
    pub matched: usize,
}

impl std::fmt::Display for DoneResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.matched == 0 {
            write!(f, "No task found with id '{}'", self.id)
        } else {
            write!(f, "Completed task: {}", self.id)
        }
    }
}

impl DoneCommand {
    /// Execute the done command.
    ///
    /// An unknown id is not an error; the result reports zero matches.
    pub async fn execute<S: TaskStore>(&self, store: &S) -> Result<DoneResult, DbError> {
        let matched = TaskRepository::new(store).mark_completed(&self.id).await?;
        Ok(DoneResult {
            id: self.id.clone(),
            matched,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tasklist_db::MemoryStore;

    #[tokio::test]
    async fn test_done_marks_task() {
        let store = MemoryStore::new();
        let task = TaskRepository::new(&store).create("A").await.unwrap();

        let result = DoneCommand {
            id: task.id.clone(),
        }
        .execute(&store)
        .await
        .unwrap();

        assert_eq!(result.matched, 1);
        assert_eq!(result.to_string(), format!("Completed task: {}", task.id));
        let stored = TaskRepository::new(&store).load().await.unwrap().unwrap();
        assert!(stored[0].is_completed);
    }

    #[tokio::test]
    async fn test_done_twice_succeeds() {
        let store = MemoryStore::new();
        let task = TaskRepository::new(&store).create("A").await.unwrap();
        let cmd = DoneCommand { id: task.id };

        cmd.execute(&store).await.unwrap();
        let again = cmd.execute(&store).await.unwrap();

        assert_eq!(again.matched, 1);
    }

    #[tokio::test]
    async fn test_done_unknown_id_reports_not_found() {
        let store = MemoryStore::new();
        let result = DoneCommand {
            id: "nope".to_string(),
        }
        .execute(&store)
        .await
        .unwrap();

        assert_eq!(result.matched, 0);
        assert_eq!(result.to_string(), "No task found with id 'nope'");
    }
}
