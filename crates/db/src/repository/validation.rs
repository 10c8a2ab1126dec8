//! Input validation for repository operations
//!
//! Checks run before any storage access, so a rejected call never reads or
//! writes the store.

use crate::error::{DbError, DbResult};

/// Validate a task title.
///
/// Empty and whitespace-only titles are rejected. Accepted titles are
/// stored exactly as given.
pub fn validate_title(title: &str) -> DbResult<()> {
    if title.trim().is_empty() {
        return Err(DbError::validation("Task title cannot be empty"));
    }
    Ok(())
}
