//! Error types for the syncpath library.
//!
//! This module provides the error hierarchy shared by every operation in the
//! crate, using `thiserror` for ergonomic error handling.

use std::io;

use thiserror::Error;

/// Result type alias for operations that may fail with a syncpath error.
///
/// # Examples
///
/// ```
/// use syncpath::{Error, Result};
///
/// fn example_operation() -> Result<u64> {
///     Ok(4096)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the syncpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// The caller passed a malformed input value, such as an empty path.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// The reason the input was rejected.
        reason: String,
    },

    /// An argument was outside of its allowed domain.
    #[error("invalid argument '{argument}': {reason}")]
    InvalidArgument {
        /// The name of the offending argument.
        argument: &'static str,
        /// The reason the argument is invalid.
        reason: String,
    },

    /// The storage adapter failed while working on a specific path.
    #[error("storage error at '{path}': {source}")]
    Storage {
        /// The path the adapter was operating on.
        path: String,
        /// The underlying adapter error.
        #[source]
        source: io::Error,
    },

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if error came from the storage adapter.
    ///
    /// # Examples
    ///
    /// ```
    /// use syncpath::Error;
    /// use std::io;
    ///
    /// let err = Error::Storage {
    ///     path: "a/b".to_string(),
    ///     source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    /// };
    /// assert!(err.is_storage());
    /// ```
    #[must_use]
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage { .. })
    }

    /// The path a storage failure is attached to, if any.
    ///
    /// Callers use this to retry the single ancestor that failed.
    ///
    /// # Examples
    ///
    /// ```
    /// use syncpath::Error;
    /// use std::io;
    ///
    /// let err = Error::Storage {
    ///     path: "a/b".to_string(),
    ///     source: io::Error::new(io::ErrorKind::Other, "boom"),
    /// };
    /// assert_eq!(err.storage_path(), Some("a/b"));
    /// ```
    #[must_use]
    pub fn storage_path(&self) -> Option<&str> {
        match self {
            Self::Storage { path, .. } => Some(path),
            _ => None,
        }
    }

    pub(crate) fn storage(path: &str, source: io::Error) -> Self {
        Self::Storage {
            path: path.to_string(),
            source,
        }
    }
}
