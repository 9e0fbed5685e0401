//! Error types for git operations.

use thiserror::Error;

/// Errors that can occur while querying a git working copy.
#[derive(Error, Debug)]
pub enum GitError {
    /// git not found in PATH.
    #[error("git not found in PATH")]
    NotFound,

    /// git exited with a non-zero status.
    #[error("`git {command}` failed: {stderr}")]
    CommandFailed { command: String, stderr: String },

    /// git produced output that is not valid UTF-8.
    #[error("invalid output from `git {0}`")]
    InvalidOutput(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for git operations.
pub type Result<T> = std::result::Result<T, GitError>;
