//! Test infrastructure for integration tests
//!
//! Provides isolated database setup/teardown and command builder helpers.
//! Each test gets its own database instance to ensure no shared state.

use std::path::PathBuf;
use tasklist::commands::{
    AddCommand, DeleteCommand, DoneCommand, ListCommand, NameCommand, ResetCommand,
};
use tasklist_db::{Database, Task};

/// Test context containing an isolated database and temp directory
pub struct TestContext {
    pub db: Database,
    pub temp_dir: PathBuf,
}

impl TestContext {
    /// Create a new test context with an isolated database.
    ///
    /// Each call creates a uniquely named temp directory using process ID,
    /// thread ID, and nanosecond timestamp to guarantee isolation.
    pub async fn new() -> Self {
        let temp_dir = std::env::temp_dir().join(format!(
            "tl-integration-test-{}-{:?}-{}",
            std::process::id(),
            std::thread::current().id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));

        let db = Database::connect(&temp_dir).await.unwrap();
        db.init().await.unwrap();

        Self { db, temp_dir }
    }

    /// Create a task through the add command and return it.
    pub async fn add(&self, title: &str) -> Task {
        add_cmd(title).execute(&self.db).await.unwrap()
    }

    /// Titles of the visible list, newest first.
    pub async fn visible_titles(&self) -> Vec<String> {
        ListCommand { all: false }
            .execute(&self.db)
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect()
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.temp_dir);
    }
}

// =============================================================================
// Command Builder Helpers
// =============================================================================

/// Create an AddCommand for the given title.
pub fn add_cmd(title: &str) -> AddCommand {
    AddCommand {
        title: title.to_string(),
    }
}

/// Create a DoneCommand for the given id.
pub fn done_cmd(id: &str) -> DoneCommand {
    DoneCommand { id: id.to_string() }
}

/// Create a DeleteCommand for the given id.
pub fn delete_cmd(id: &str) -> DeleteCommand {
    DeleteCommand { id: id.to_string() }
}

/// Create a confirmed ResetCommand.
pub fn reset_cmd() -> ResetCommand {
    ResetCommand { yes: true }
}

/// Create a NameCommand that sets the given name.
#[allow(dead_code)]
pub fn set_name_cmd(name: &str) -> NameCommand {
    NameCommand {
        name: Some(name.to_string()),
    }
}
