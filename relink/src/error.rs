//! Error types for the relink library.
//!
//! This module provides the error hierarchy shared by path math, directory
//! purging and symlink creation, using `thiserror` for ergonomic error
//! handling.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a relink error.
///
/// # Examples
///
/// ```
/// use relink::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("./y".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The filesystem primitive that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FsOperation {
    /// Reading the process working directory.
    CurrentDir,
    /// Changing the process working directory.
    SetCurrentDir,
    /// Querying the kind of an entry.
    Inspect,
    /// Creating a directory and its parents.
    CreateDir,
    /// Removing an empty directory.
    RemoveDir,
    /// Removing a file.
    RemoveFile,
    /// Removing a symbolic link without following it.
    RemoveSymlink,
    /// Listing directory contents.
    Walk,
    /// Creating a symbolic link.
    CreateSymlink,
}

impl fmt::Display for FsOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CurrentDir => write!(f, "get working directory"),
            Self::SetCurrentDir => write!(f, "set working directory"),
            Self::Inspect => write!(f, "inspect"),
            Self::CreateDir => write!(f, "create directory"),
            Self::RemoveDir => write!(f, "remove directory"),
            Self::RemoveFile => write!(f, "remove file"),
            Self::RemoveSymlink => write!(f, "remove symlink"),
            Self::Walk => write!(f, "walk directory"),
            Self::CreateSymlink => write!(f, "create symlink"),
        }
    }
}

/// The main error type for the relink library.
#[derive(Debug, Error)]
pub enum Error {
    /// An argument did not satisfy the operation's precondition.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// What was wrong with the argument.
        message: String,
    },

    /// A non-directory entry occupies a path that must be a directory.
    #[error("{} exists and is not a directory", path.display())]
    PathConflict {
        /// The occupied path.
        path: PathBuf,
    },

    /// An underlying filesystem primitive failed.
    #[error("cannot {operation} {}: {source}", path.display())]
    FileSystem {
        /// The primitive that failed.
        operation: FsOperation,
        /// The path the primitive was applied to.
        path: PathBuf,
        /// The OS error, or the captured output of a link command.
        #[source]
        source: std::io::Error,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Wrap an OS error raised by `operation` on `path`.
    ///
    /// # Examples
    ///
    /// ```
    /// use relink::error::{Error, FsOperation};
    /// use std::io;
    ///
    /// let err = Error::file_system(
    ///     FsOperation::RemoveFile,
    ///     "/tmp/x",
    ///     io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    /// );
    /// assert!(err.is_file_system());
    /// ```
    pub fn file_system(
        operation: FsOperation,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            operation,
            path: path.into(),
            source,
        }
    }

    /// Check if error is an invalid argument.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Check if error is a path conflict.
    ///
    /// # Examples
    ///
    /// ```
    /// use relink::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PathConflict { path: PathBuf::from("/tmp/file") };
    /// assert!(err.is_path_conflict());
    /// ```
    #[must_use]
    pub fn is_path_conflict(&self) -> bool {
        matches!(self, Self::PathConflict { .. })
    }

    /// Check if error came from a filesystem primitive.
    #[must_use]
    pub fn is_file_system(&self) -> bool {
        matches!(self, Self::FileSystem { .. })
    }

    /// The failing primitive, for filesystem errors.
    #[must_use]
    pub fn operation(&self) -> Option<FsOperation> {
        match self {
            Self::FileSystem { operation, .. } => Some(*operation),
            _ => None,
        }
    }
}
