use std::path::PathBuf;
use thiserror::Error;

/// Broad classification of a [`DbError`]
///
/// Callers that only need to decide how to react (show a message, ask the
/// user to fix their input, warn about damaged data) can match on this
/// instead of the individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The store or its surroundings failed (I/O, engine, serialization,
    /// id generation); retrying the same input may succeed
    StorageFault,
    /// A stored value exists but does not parse into the expected shape
    CorruptState,
    /// The caller supplied invalid input; nothing was read or written
    Validation,
}

/// Storage error types for tasklist
#[derive(Error, Debug)]
pub enum DbError {
    /// Error establishing connection to the database
    #[error("Failed to connect to database at {path}: {source}")]
    Connection {
        path: PathBuf,
        #[source]
        source: Box<surrealdb::Error>,
    },

    /// Error during schema initialization
    #[error("Failed to initialize database schema: {0}")]
    Schema(#[source] Box<surrealdb::Error>),

    /// Error executing a query
    #[error("Query execution failed")]
    Query(#[source] Box<surrealdb::Error>),

    /// Error with database path (invalid or inaccessible)
    #[error("Invalid database path: {path} - {reason}")]
    InvalidPath { path: PathBuf, reason: String },

    /// Error creating database directory
    #[error("Failed to create database directory at {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error serializing a value before it is written
    #[error("Failed to encode value for '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A stored value could not be parsed
    #[error("Stored value for '{key}' is corrupt: {source}")]
    CorruptState {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Reading or writing outside the store failed (terminal input)
    #[error("Failed to {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Every generated id candidate was already taken
    #[error("Failed to generate a unique task id after {attempts} attempts")]
    IdExhausted { attempts: u32 },

    /// Error for invalid input or validation failure
    #[error("{message}")]
    ValidationError { message: String },
}

impl From<surrealdb::Error> for DbError {
    fn from(err: surrealdb::Error) -> Self {
        DbError::Query(Box::new(err))
    }
}

impl DbError {
    /// Create a validation error from any message.
    pub fn validation(message: impl Into<String>) -> Self {
        DbError::ValidationError {
            message: message.into(),
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DbError::CorruptState { .. } => ErrorKind::CorruptState,
            DbError::ValidationError { .. } => ErrorKind::Validation,
            DbError::Connection { .. }
            | DbError::Schema(_)
            | DbError::Query(_)
            | DbError::InvalidPath { .. }
            | DbError::CreateDirectory { .. }
            | DbError::Encode { .. }
            | DbError::Io { .. }
            | DbError::IdExhausted { .. } => ErrorKind::StorageFault,
        }
    }

    /// Get the full error message including nested SurrealDB error details.
    ///
    /// This is useful for displaying detailed error information to users.
    pub fn full_message(&self) -> String {
        match self {
            DbError::Query(err) => format!("Query execution failed: {}", err),
            other => other.to_string(),
        }
    }
}

/// Result type alias for database operations
pub type DbResult<T> = Result<T, DbError>;
