//! Error types for manifest creation and verification.

use crate::types::Digest;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that end a creation or verification run.
///
/// Per-entry stat failures during a walk are not errors; they are collected as
/// [`crate::tree::walker::WalkWarning`]s and the walk continues.
#[derive(Debug, Error)]
pub enum HcompareError {
    #[error("Cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Manifest I/O error on {}: {source}", path.display())]
    ManifestIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot open directory {}: {source}", path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Path too long ({len} bytes, limit {max}): {}", path.display())]
    PathTooLong { path: PathBuf, len: usize, max: usize },

    #[error("Malformed manifest record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("Digest mismatch at line {line} for {}: expected {expected}, got {actual}", path.display())]
    DigestMismatch {
        path: PathBuf,
        expected: Digest,
        actual: Digest,
        line: usize,
    },

    #[error("Path cannot be stored in a manifest (contains tab or newline): {0:?}")]
    UnrepresentablePath(PathBuf),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to render output: {0}")]
    Render(String),
}

impl HcompareError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        HcompareError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn manifest_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        HcompareError::ManifestIo {
            path: path.into(),
            source,
        }
    }
}

impl From<config::ConfigError> for HcompareError {
    fn from(err: config::ConfigError) -> Self {
        HcompareError::ConfigError(err.to_string())
    }
}
