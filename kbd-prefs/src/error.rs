//! Error types for preference persistence

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by preference backends
#[derive(Debug, Error)]
pub enum PrefsError {
    /// Reading or writing the preferences file failed
    #[error("preferences I/O failed for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The preferences file exists but does not hold a JSON object
    #[error("preferences file {} is not valid JSON: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// No home directory to place the default preferences file in
    #[error("could not determine the home directory")]
    NoHomeDir,

    /// A backend refused the write for a reason of its own
    #[error("preference backend rejected the write: {0}")]
    Backend(String),
}

/// Result alias used across the crate
pub type PrefsResult<T> = Result<T, PrefsError>;
