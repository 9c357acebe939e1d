//! Error types for the answerkey library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for answerkey operations.
#[derive(Debug, Error)]
pub enum AnswerKeyError {
    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a JSON array of question objects.
    #[error("Parse error in '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The question set could not be encoded for writing.
    #[error("Failed to serialize questions: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Snapshotting the file before overwriting it failed.
    #[error("Backup error for '{path}': {message}")]
    Backup { path: PathBuf, message: String },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for answerkey operations.
pub type Result<T> = std::result::Result<T, AnswerKeyError>;
