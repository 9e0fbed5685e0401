//! Error types for build info output.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while writing or reading a build info file.
#[derive(Error, Debug)]
pub enum BuildInfoError {
    /// The directory that should hold the output file does not exist.
    #[error("output directory does not exist: {}", path.display())]
    MissingDirectory { path: PathBuf },

    /// Failed to write the output file.
    #[error("failed to write {}: {source}", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read a build info file.
    #[error("failed to read {}: {source}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization or parsing error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for build info operations.
pub type Result<T> = std::result::Result<T, BuildInfoError>;
