//! Error types for userdir.
//!
//! This module defines all error types used throughout the userdir crate,
//! providing detailed context for debugging and user-friendly error messages.

use std::path::PathBuf;
use thiserror::Error;

use crate::form::Field;

/// The main error type for userdir operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Store Errors ===
    /// Failed to write the user store file.
    #[error("failed to persist user store at {path}: {source}")]
    StorePersist {
        /// Path to the store file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Form Errors ===
    /// The entry form was submitted with a required field still empty.
    ///
    /// The input layer refuses incomplete submissions, so this guards a
    /// precondition rather than reporting a user-facing failure.
    #[error("missing required field: {field}")]
    FormIncomplete {
        /// The first empty field.
        field: Field,
    },

    // === Lookup Errors ===
    /// No record carries the requested identifier.
    #[error("no user found with id {id}")]
    UserNotFound {
        /// The identifier that matched nothing.
        id: String,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Generic Errors ===
    /// An internal error occurred (bug).
    #[error("internal error: {0}")]
    Internal(String),
}

/// A specialized Result type for userdir operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a new internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Create a user-not-found error for the given identifier.
    #[must_use]
    pub fn user_not_found(id: impl Into<String>) -> Self {
        Self::UserNotFound { id: id.into() }
    }

    /// Check if this error indicates an unknown user identifier.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound { .. })
    }

    /// Check if this error came from the entry form precondition guard.
    #[must_use]
    pub fn is_form_incomplete(&self) -> bool {
        matches!(self, Self::FormIncomplete { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_not_found_display() {
        let err = Error::user_not_found("abc123");
        assert_eq!(err.to_string(), "no user found with id abc123");
    }

    #[test]
    fn test_is_not_found() {
        assert!(Error::user_not_found("x").is_not_found());
        assert!(!Error::internal("x").is_not_found());
    }

    #[test]
    fn test_form_incomplete_display() {
        let err = Error::FormIncomplete { field: Field::Email };
        assert_eq!(err.to_string(), "missing required field: email");
        assert!(err.is_form_incomplete());
    }

    #[test]
    fn test_internal_error() {
        let err = Error::internal("something went wrong");
        assert_eq!(err.to_string(), "internal error: something went wrong");
    }

    #[test]
    fn test_store_persist_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = Error::StorePersist {
            path: PathBuf::from("/tmp/users.json"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/users.json"));
        assert!(msg.contains("access denied"));
    }

    #[test]
    fn test_directory_create_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = Error::DirectoryCreate {
            path: PathBuf::from("/root/forbidden"),
            source: io_err,
        };
        assert!(err.to_string().contains("/root/forbidden"));
    }

    #[test]
    fn test_config_validation_display() {
        let err = Error::ConfigValidation {
            message: "store_path points to a directory".to_string(),
        };
        assert!(err.to_string().contains("store_path"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_from_json_error() {
        let json_result: std::result::Result<i32, serde_json::Error> =
            serde_json::from_str("not valid json");
        if let Err(json_err) = json_result {
            let err: Error = json_err.into();
            assert!(matches!(err, Error::Json(_)));
        }
    }
}
