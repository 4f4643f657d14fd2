//! Error types for file entry parsing.
//!
//! The sequence operations themselves never fail; these errors only come from
//! validating [`FileEntry`](crate::file::FileEntry) values.

use thiserror::Error;

/// Result type alias for file entry operations.
pub type FileResult<T> = Result<T, FileError>;

/// Errors that can occur while validating a file entry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FileError {
    /// The path is the empty string.
    #[error("Empty path")]
    EmptyPath,

    /// The path ends in a separator, so there is no file name.
    #[error("Path has no file name: {0}")]
    MissingName(String),
}

impl FileError {
    /// Creates a MissingName error.
    pub fn missing_name(path: impl Into<String>) -> Self {
        Self::MissingName(path.into())
    }
}
