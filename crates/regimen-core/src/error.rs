//! Error types for the program builder library.

use std::path::PathBuf;

use thiserror::Error;

use crate::wizard::{OutOfRange, Violation};

/// Comprehensive error type for all program builder operations.
///
/// Validation failures of the wizard steps are not errors: they surface
/// through `ProgramDraft::is_valid` and the draft's field error map. This type
/// covers storage, configuration, and the finalization boundary.
#[derive(Error, Debug)]
pub enum BuilderError {
    /// Draft storage connection or query errors
    #[error("Storage error: {message}")]
    Storage {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// A structural edit addressed a week, workout or exercise that does not exist
    #[error("Index out of range: {0}")]
    OutOfRange(#[from] OutOfRange),
    /// The draft failed the submission readiness check
    #[error("Draft is not ready for submission: {}", issues.join("; "))]
    NotReady { issues: Vec<String> },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating storage errors with optional context.
pub struct StorageErrorBuilder {
    message: String,
}

impl StorageErrorBuilder {
    /// Create a new storage error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> BuilderError {
        BuilderError::Storage {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> BuilderError {
        BuilderError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl BuilderError {
    /// Creates a builder for storage errors.
    pub fn storage(message: impl Into<String>) -> StorageErrorBuilder {
        StorageErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }
}

impl From<Violation> for BuilderError {
    fn from(violation: Violation) -> Self {
        match violation {
            Violation::OutOfRange(e) => BuilderError::OutOfRange(e),
            Violation::DurationTooLong { .. } => {
                BuilderError::invalid_input("durationWeeks").with_reason(violation.to_string())
            }
        }
    }
}

/// Specialized extension trait for storage-related Results.
pub trait StorageResultExt<T> {
    /// Map storage driver errors with a message.
    fn storage_context(self, message: &str) -> Result<T>;
}

impl<T> StorageResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn storage_context(self, message: &str) -> Result<T> {
        self.map_err(|e| BuilderError::storage(message).with_source(e))
    }
}

/// Result type alias for program builder operations
pub type Result<T> = std::result::Result<T, BuilderError>;
