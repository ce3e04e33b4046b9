//! Error types for `distserve-core`.
//!
//! All fallible resolver operations return [`CoreResult<T>`], an alias for
//! `Result<T, CoreError>`.

use std::path::PathBuf;

/// Unified error type for resolver construction and file resolution.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The requested file does not exist, is not a regular file, or lies
    /// outside the directory it was resolved against.
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// The distribution directory points at something other than a directory.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// The application shell (`index.html`) is absent.
    #[error("application shell missing: {0}")]
    MissingShell(PathBuf),

    /// The process lacks permission to access the path.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// Maps an I/O error on `path` to the most specific variant.
    pub(crate) fn from_io(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => CoreError::NotFound(path.into()),
            std::io::ErrorKind::PermissionDenied => CoreError::PermissionDenied(path.into()),
            _ => CoreError::Io(err),
        }
    }
}

/// Convenience alias used throughout `distserve-core`.
pub type CoreResult<T> = Result<T, CoreError>;
