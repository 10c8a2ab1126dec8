//! Storage layer for tasklist
//!
//! Provides the key-value store contract, an embedded SurrealDB store,
//! and the repositories that own the task collection and user profile.

pub mod error;
pub mod id;
pub mod models;
pub mod repository;
pub mod schema;
pub mod store;

pub use error::{DbError, DbResult, ErrorKind};
pub use models::Task;
pub use repository::{
    NAME_KEY, ProfileRepository, TASK_ARRAY_KEY, TaskRepository, derive_visible_list,
};
pub use store::{MemoryStore, TaskStore};

use schema::KV_TABLE;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, SurrealKv};
use tracing::{debug, trace};

/// Default database path relative to the user's home directory
pub const DEFAULT_DB_SUBPATH: &str = ".tasklist/data";

/// Database wrapper providing a durable [`TaskStore`] on embedded SurrealDB
pub struct Database {
    /// The underlying SurrealDB client
    client: Surreal<Db>,
    /// Path where the database is stored
    path: PathBuf,
}

/// Row shape of the key-value table; the record id is ignored
#[derive(Debug, Deserialize)]
struct KvRow {
    value: String,
}

impl Database {
    /// Connect to a SurrealDB database at the specified path.
    ///
    /// Creates the database directory if it doesn't exist.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the database directory
    ///
    /// # Errors
    ///
    /// Returns `DbError::CreateDirectory` if directory creation fails.
    /// Returns `DbError::Connection` if database connection fails.
    pub async fn connect(path: &Path) -> DbResult<Self> {
        let path = Self::prepare_path(path)?;

        debug!("Opening database at {}", path.display());
        let client =
            Surreal::new::<SurrealKv>(path.clone())
                .await
                .map_err(|e| DbError::Connection {
                    path: path.clone(),
                    source: Box::new(e),
                })?;

        Ok(Self { client, path })
    }

    /// Initialize the database schema.
    ///
    /// Selects the tasklist namespace and database, then defines the
    /// key-value table.
    ///
    /// # Errors
    ///
    /// Returns `DbError::Schema` if schema initialization fails.
    pub async fn init(&self) -> DbResult<()> {
        self.client
            .use_ns("tasklist")
            .use_db("main")
            .await
            .map_err(|e| DbError::Schema(Box::new(e)))?;

        schema::init_schema(&self.client).await?;

        Ok(())
    }

    /// Get a reference to the underlying SurrealDB client.
    pub fn client(&self) -> &Surreal<Db> {
        &self.client
    }

    /// Get the path where the database is stored.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Repository for the task collection stored in this database
    pub fn tasks(&self) -> TaskRepository<'_, Self> {
        TaskRepository::new(self)
    }

    /// Repository for the user profile stored in this database
    pub fn profile(&self) -> ProfileRepository<'_, Self> {
        ProfileRepository::new(self)
    }

    /// Get the default database path based on the user's home directory.
    ///
    /// Returns `~/.tasklist/data` expanded to the actual home directory path.
    ///
    /// # Errors
    ///
    /// Returns `DbError::InvalidPath` if the home directory cannot be determined.
    pub fn default_path() -> DbResult<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(DEFAULT_DB_SUBPATH))
            .ok_or_else(|| DbError::InvalidPath {
                path: PathBuf::from("~"),
                reason: "Could not determine home directory".to_string(),
            })
    }

    /// Prepare the database path by validating and creating directories.
    fn prepare_path(path: &Path) -> DbResult<PathBuf> {
        let path = path.to_path_buf();

        if path.exists() && !path.is_dir() {
            return Err(DbError::InvalidPath {
                path,
                reason: "Not a directory".to_string(),
            });
        }

        if !path.exists() {
            std::fs::create_dir_all(&path).map_err(|e| DbError::CreateDirectory {
                path: path.clone(),
                source: e,
            })?;
        }

        Ok(path)
    }
}

impl TaskStore for Database {
    async fn get(&self, key: &str) -> DbResult<Option<String>> {
        trace!("kv get: {}", key);
        let mut response = self
            .client
            .query("SELECT * FROM type::thing($table, $key)")
            .bind(("table", KV_TABLE))
            .bind(("key", key.to_string()))
            .await?;
        let row: Option<KvRow> = response.take(0)?;
        Ok(row.map(|r| r.value))
    }

    async fn set(&self, key: &str, value: &str) -> DbResult<()> {
        trace!("kv set: {} ({} bytes)", key, value.len());
        self.client
            .query("UPSERT type::thing($table, $key) SET value = $value")
            .bind(("table", KV_TABLE))
            .bind(("key", key.to_string()))
            .bind(("value", value.to_string()))
            .await?
            .check()?;
        Ok(())
    }

    async fn clear(&self) -> DbResult<()> {
        debug!("Clearing every key in {}", self.path.display());
        self.client
            .query(format!("DELETE {}", KV_TABLE))
            .await?
            .check()?;
        Ok(())
    }
}

// Ensure Database is Send + Sync for async compatibility
static_assertions::assert_impl_all!(Database: Send, Sync);
