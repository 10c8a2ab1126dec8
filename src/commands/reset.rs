//! Reset command for wiping all stored data
//!
//! Implements the `tl reset` command. Clears every key in the store,
//! including the user's name. There is no undo.

use clap::Args;
use tasklist_db::{DbError, TaskRepository, TaskStore};

/// Delete all tasks and the stored name (irreversible)
#[derive(Debug, Args)]
pub struct ResetCommand {
    /// Confirm that everything should be erased
    #[arg(long)]
    pub yes: bool,
}

impl ResetCommand {
    /// Execute the reset command.
    ///
    /// # Errors
    ///
    /// Returns `DbError::ValidationError` without touching the store if
    /// `--yes` was not given.
    pub async fn execute<S: TaskStore>(&self, store: &S) -> Result<String, DbError> {
        if !self.yes {
            return Err(DbError::validation(
                "reset erases all tasks and your name; re-run with --yes to confirm",
            ));
        }

        TaskRepository::new(store).reset_all().await?;
        Ok("All data cleared".to_string())
    }
}
