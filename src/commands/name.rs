//! Name command for the user profile
//!
//! Implements the `tl name` command: show the stored name, or set it.

use clap::Args;
use tasklist_db::{DbError, ProfileRepository, TaskStore};

/// Show or set your display name
#[derive(Debug, Args)]
pub struct NameCommand {
    /// New name to store (omit to show the current one)
    pub name: Option<String>,
}

impl NameCommand {
    /// Execute the name command.
    pub async fn execute<S: TaskStore>(&self, store: &S) -> Result<String, DbError> {
        let profile = ProfileRepository::new(store);

        match &self.name {
            Some(name) => {
                profile.set_name(name).await?;
                Ok(format!("Name set to: {}", name))
            }
            None => Ok(profile
                .name()
                .await?
                .unwrap_or_else(|| "No name set".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tasklist_db::MemoryStore;

    #[tokio::test]
    async fn test_show_without_name() {
        let store = MemoryStore::new();
        let out = NameCommand { name: None }.execute(&store).await.unwrap();
        assert_eq!(out, "No name set");
    }

    #[tokio::test]
    async fn test_set_then_show() {
        let store = MemoryStore::new();

        let out = NameCommand {
            name: Some("Rohan".to_string()),
        }
        .execute(&store)
        .await
        .unwrap();
        assert_eq!(out, "Name set to: Rohan");

        let shown = NameCommand { name: None }.execute(&store).await.unwrap();
        assert_eq!(shown, "Rohan");
    }
}
