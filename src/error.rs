//! Error types for img-sequence.
//!
//! All operations return `Result<T>` which aliases `Result<T, RenameError>`.
//! Informational results (no images found, no undo history, skipped files)
//! are not errors; they are reported through the operation outcomes.

use crate::naming::RenamedFile;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from rename and undo operations.
#[derive(Debug, Error)]
pub enum RenameError {
    /// Target path is missing or not a directory.
    #[error("Invalid folder path: {0}")]
    InvalidDirectory(PathBuf),

    /// Prefix is empty or would escape the target directory.
    #[error("Invalid prefix '{0}': {1}")]
    InvalidPrefix(String, String),

    /// No file type was selected.
    #[error("Select at least one file type")]
    NoExtensions,

    /// Extension outside the supported image domain.
    #[error("Unsupported file type '{0}' (supported: {1})")]
    UnsupportedExtension(String, String),

    /// Undo log name is not a plain file name.
    #[error("Invalid undo log name '{0}': must be a file name inside the folder")]
    InvalidLogName(String),

    /// Undo log exists but cannot be parsed.
    #[error("Undo log {path} is malformed: {source}")]
    MalformedLog {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A single file move failed; the batch was aborted.
    #[error("Failed to rename {from} → {to}: {source}")]
    RenameFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The batch was applied but its undo log could not be written.
    /// `renamed` lists what was moved so it can still be reported.
    #[error(
        "Renamed {} file(s) but could not write undo log {path}: {source}",
        .renamed.len()
    )]
    UndoLogNotWritten {
        path: PathBuf,
        renamed: Vec<RenamedFile>,
        #[source]
        source: Box<RenameError>,
    },

    /// File system operation failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Regex compilation failed (indicates bug).
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

/// Result type alias for img-sequence operations.
pub type Result<T> = std::result::Result<T, RenameError>;
