//! Error types for the roster library
//!
//! Errors are split by concern: [`StorageError`] is what a repository
//! reports, [`RosterError`] is what the service reports, and
//! [`ConfigError`] covers environment-driven configuration.

use std::path::PathBuf;
use thiserror::Error;

use crate::student::StudentId;

/// Main error type for service operations
#[derive(Error, Debug)]
pub enum RosterError {
    /// No record in the collection carries the requested ID
    #[error("Student not found: {id}")]
    NotFound { id: StudentId },

    /// The highest stored ID is `u64::MAX`, so no new ID can be assigned
    #[error("Student IDs exhausted")]
    IdExhausted,

    /// Error reported by the repository, carried as-is
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors reported by a [`Repository`](crate::storage::Repository)
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue { var: String, value: String },
}

/// Shorthand result type for service operations
pub type Result<T> = std::result::Result<T, RosterError>;

impl RosterError {
    /// Create a not-found error for the given ID
    pub fn not_found(id: impl Into<StudentId>) -> Self {
        RosterError::NotFound { id: id.into() }
    }

    /// Check whether this error means the requested record does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, RosterError::NotFound { .. })
    }

    /// The underlying storage error, if the repository failed
    pub fn storage_error(&self) -> Option<&StorageError> {
        match self {
            RosterError::Storage(e) => Some(e),
            RosterError::NotFound { .. } | RosterError::IdExhausted => None,
        }
    }
}

impl StorageError {
    #[cfg_attr(not(feature = "fs"), allow(dead_code))]
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StorageError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = RosterError::not_found(999);
        assert!(err.is_not_found());
        assert!(err.storage_error().is_none());
        assert_eq!(err.to_string(), "Student not found: 999");
    }

    #[test]
    fn test_storage_error_is_transparent() {
        let err: RosterError = StorageError::Backend("disk on fire".to_string()).into();
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "Storage backend error: disk on fire");
        assert!(matches!(
            err.storage_error(),
            Some(StorageError::Backend(msg)) if msg == "disk on fire"
        ));
    }

    #[test]
    fn test_io_error_mentions_path() {
        let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = StorageError::io("/tmp/students.json", source);
        assert_eq!(err.to_string(), "I/O error on /tmp/students.json: denied");
    }
}
