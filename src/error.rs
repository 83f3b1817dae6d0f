//! Error types for bump-version.
//!
//! All operations return `Result<T>` which aliases `Result<T, BumpError>`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from version bump operations.
#[derive(Debug, Error)]
pub enum BumpError {
    /// Wrong command-line usage.
    #[error("{0}")]
    Usage(String),

    /// Version string does not look like `MAJOR.MINOR.PATCH[-PRERELEASE]`.
    #[error(
        "Invalid version format '{0}'. Expected semantic version like '1.2.3' or '1.2.3-beta.1'"
    )]
    InvalidVersion(String),

    /// Manifest lacks the expected field, or it has the wrong type.
    #[error("{}: {}", path.display(), reason)]
    MissingField { path: PathBuf, reason: String },

    /// No `version = ` line inside the `[package]` section.
    #[error("Could not find version in [package] section of {}", .0.display())]
    SectionNotFound(PathBuf),

    /// Rollback failed after commit error.
    #[error("Rollback failed: {0}")]
    RollbackFailed(String),

    /// File system operation failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON parse or serialization error.
    #[error("JSON error in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Regex compilation failed (indicates bug).
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Unexpected error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for bump-version operations.
pub type Result<T> = std::result::Result<T, BumpError>;
