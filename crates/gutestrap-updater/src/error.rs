//! Updater error types.

use thiserror::Error;

/// Updater-related errors.
#[derive(Debug, Error)]
pub enum UpdaterError {
    /// Version string could not be parsed, even after normalization.
    #[error("invalid version {version:?}: {source}")]
    InvalidVersion {
        version: String,
        #[source]
        source: semver::Error,
    },
}

/// Result type for updater operations.
pub type UpdaterResult<T> = Result<T, UpdaterError>;
