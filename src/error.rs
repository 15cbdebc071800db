//! Error types for folder hashing.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while classifying, reading, or hashing an entry
///
/// Every variant aborts the whole `hash_element` call; no partial tree is
/// ever returned alongside one of these.
#[derive(Debug, Error)]
pub enum HashError {
    #[error("Entry not found: {0:?}")]
    NotFound(PathBuf),

    #[error("Entry unreadable: {path:?}: {reason}")]
    Unreadable { path: PathBuf, reason: String },

    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid entry name: {0:?}")]
    InvalidName(String),

    #[error("Maximum depth {max_depth} exceeded at {path:?}")]
    DepthExceeded { path: PathBuf, max_depth: usize },

    #[error("Hashing cancelled")]
    Cancelled,

    #[error("Hashing task failed: {0}")]
    TaskFailed(String),
}

impl HashError {
    /// Map an I/O error on `path` to `NotFound` or an unreadable condition
    pub fn from_io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            std::io::ErrorKind::NotFound => HashError::NotFound(path),
            _ => HashError::Io { path, source: err },
        }
    }

    /// True for permission and other I/O failures on read or list
    pub fn is_unreadable(&self) -> bool {
        matches!(self, HashError::Unreadable { .. } | HashError::Io { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, HashError::NotFound(_))
    }
}

/// Configuration and logging setup errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}
