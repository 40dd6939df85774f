//! Domain layer error types
//!
//! All errors that can occur in domain layer operations.

use thiserror::Error;

/// Main domain error type
#[derive(Error, Debug)]
pub enum DomainError {
    /// Required storage or paths could not be prepared
    #[error("Setup failed: {0}")]
    Setup(String),

    /// A single discovery location or launcher scanner failed
    #[error("Source '{name}' failed: {message}")]
    Source { name: String, message: String },

    /// Entry validation failed
    #[error("Validation error: {0}")]
    Validation(#[from] EntryError),

    /// Entity not found
    #[error("Entity not found: {0}")]
    NotFound(String),

    /// IO error while reading or writing persisted state
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Build a source failure for the named discovery source
    pub fn source_failure(name: impl Into<String>, message: impl std::fmt::Display) -> Self {
        DomainError::Source {
            name: name.into(),
            message: message.to_string(),
        }
    }
}

impl From<std::io::Error> for DomainError {
    fn from(err: std::io::Error) -> Self {
        DomainError::Persistence(err.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::Parse(err.to_string())
    }
}

/// Reasons an entry is rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryError {
    #[error("entry: missing name")]
    MissingName,

    #[error("entry: missing exec command")]
    MissingExec,

    #[error("entry: empty exec command after parsing")]
    EmptyExec,
}
