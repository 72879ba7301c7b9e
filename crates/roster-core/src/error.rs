//! Error types for the roster library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all roster operations.
#[derive(Error, Debug)]
pub enum RosterError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Student not found for the given ID
    #[error("Student with ID {id} not found")]
    StudentNotFound { id: u64 },
    /// School not found for the given ID
    #[error("School with ID {id} not found")]
    SchoolNotFound { id: u64 },
    /// Invalid input validation errors.
    ///
    /// Displays only the reason: the console loop prints these verbatim and
    /// every reason already names the offending field.
    #[error("{reason}")]
    InvalidInput { field: String, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Terminal or stream I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Seed data deserialization errors
    #[error("Seed data error: {source}")]
    SeedData {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> RosterError {
        RosterError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl RosterError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder {
            field: field.into(),
        }
    }

    /// Creates a new database error with additional context.
    pub fn database_error(message: &str, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.to_string(),
            source,
        }
    }
}

/// Extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| RosterError::database_error(message, e))
    }
}

/// Result type alias for roster operations
pub type Result<T> = std::result::Result<T, RosterError>;
