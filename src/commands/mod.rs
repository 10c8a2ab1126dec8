//! CLI commands for tasklist
//!
//! This module contains all subcommand implementations for the tl CLI.

pub mod add;
pub mod delete;
pub mod done;
pub mod list;
pub mod name;
pub mod reset;

pub use add::AddCommand;
pub use delete::{DeleteCommand, DeleteResult};
pub use done::{DoneCommand, DoneResult};
pub use list::ListCommand;
pub use name::NameCommand;
pub use reset::ResetCommand;

use crate::output::format_task_table;
use clap::Subcommand;
use tasklist_db::{DbError, TaskStore};

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a new task
    Add(AddCommand),

    /// Mark a task as completed
    Done(DoneCommand),

    /// Delete a task (hidden from the list, kept in storage)
    Delete(DeleteCommand),

    /// List tasks, newest first
    List(ListCommand),

    /// Erase all tasks and the stored name
    Reset(ResetCommand),

    /// Show or set your display name
    Name(NameCommand),
}

impl Command {
    /// Whether the first-run name prompt must be satisfied before this
    /// command runs.
    ///
    /// `name` sets the name itself and `reset` erases it, so neither asks.
    pub fn requires_profile(&self) -> bool {
        !matches!(self, Command::Name(_) | Command::Reset(_))
    }

    /// Execute the command against the given store.
    ///
    /// Returns the text to print on success.
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the command execution fails.
    pub async fn execute<S: TaskStore>(&self, store: &S) -> Result<String, DbError> {
        match self {
            Command::Add(cmd) => {
                let task = cmd.execute(store).await?;
                Ok(format!("Created task: {}", task.id))
            }
            Command::Done(cmd) => Ok(cmd.execute(store).await?.to_string()),
            Command::Delete(cmd) => Ok(cmd.execute(store).await?.to_string()),
            Command::List(cmd) => Ok(format_task_table(&cmd.execute(store).await?)),
            Command::Reset(cmd) => cmd.execute(store).await,
            Command::Name(cmd) => cmd.execute(store).await,
        }
    }
}
