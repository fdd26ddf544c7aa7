//! Error types for Staco

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Staco operations
pub type Result<T> = std::result::Result<T, StacoError>;

/// Main error type for Staco
#[derive(Error, Debug)]
pub enum StacoError {
    /// Missing or unrecognized command-line input
    #[error(transparent)]
    Usage(#[from] UsageError),

    /// A generation target is already on disk
    #[error(transparent)]
    Conflict(#[from] ConflictError),

    /// Operating-system level failure while touching a project file
    #[error("Failed to access '{}': {error}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        error: io::Error,
    },
}

impl StacoError {
    /// Wrap an I/O error with the path that produced it
    pub fn file(path: impl Into<PathBuf>, error: io::Error) -> Self {
        StacoError::File {
            path: path.into(),
            error,
        }
    }

    /// Whether this error should terminate the process.
    ///
    /// Usage and conflict errors are reported and the command ends normally;
    /// only I/O failures escape to `main`.
    pub fn is_fatal(&self) -> bool {
        matches!(self, StacoError::File { .. })
    }
}

/// Invalid or missing command-line input
#[derive(Error, Debug, PartialEq, Eq)]
pub enum UsageError {
    #[error("Please provide a new project name.")]
    MissingProjectName,

    #[error("Please provide a {0} name.")]
    MissingName(&'static str),

    #[error("Please provide a generator type.")]
    MissingKind,

    #[error("Unknown generator type: {0}")]
    UnknownKind(String),
}

/// A create-only write found its target already present
#[derive(Error, Debug, PartialEq, Eq)]
#[error("{label} '{name}' already exists.")]
pub struct ConflictError {
    /// Capitalized kind label, e.g. "Controller"
    pub label: &'static str,
    /// Name shown to the user
    pub name: String,
}
