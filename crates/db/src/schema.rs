//! Database schema initialization for tasklist
//!
//! The durable store is a single key-value table: each record id is a store
//! key and its `value` field holds the raw string.

use crate::error::DbError;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

/// Table holding every persisted key
pub const KV_TABLE: &str = "kv";

/// SQL statements for schema initialization
mod sql {
    /// Define the key-value table
    pub const DEFINE_KV_TABLE: &str = r#"
        DEFINE TABLE IF NOT EXISTS kv SCHEMAFULL;

        DEFINE FIELD IF NOT EXISTS value ON kv TYPE string;
    "#;
}

/// Initialize the database schema.
///
/// Idempotent: every definition uses `IF NOT EXISTS`.
///
/// # Errors
///
/// Returns `DbError::Schema` if the schema definition fails.
pub async fn init_schema(client: &Surreal<Db>) -> Result<(), DbError> {
    client
        .query(sql::DEFINE_KV_TABLE)
        .await
        .and_then(|response| response.check())
        .map_err(|e| DbError::Schema(Box::new(e)))?;

    Ok(())
}
