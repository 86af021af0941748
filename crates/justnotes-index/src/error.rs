//! Error types for index loading

use crate::validate::IndexIssue;
use std::path::PathBuf;

/// Errors raised while loading or installing a content index
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// Index file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON
    #[error("invalid JSON in {origin}: {message}")]
    Json {
        /// File path or `<input>`
        origin: String,
        /// Parser message
        message: String,
    },

    /// Malformed YAML
    #[error("invalid YAML in {origin}: {message}")]
    Yaml {
        /// File path or `<input>`
        origin: String,
        /// Parser message
        message: String,
    },

    /// File extension names no supported format
    #[error("unsupported index format: {0} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(PathBuf),

    /// Strict loading found structural issues
    #[error("content index has {} structural issue(s)", .0.len())]
    Invalid(Vec<IndexIssue>),

    /// The process-wide index was already installed
    #[error("content index already initialized")]
    AlreadyInitialized,
}
