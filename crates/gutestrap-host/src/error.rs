//! Host collaborator error types.

use thiserror::Error;

/// Errors reported by host collaborators.
#[derive(Debug, Error)]
pub enum HostError {
    /// Metadata could not be retrieved.
    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// Remote answered with a non-success status.
    #[error("unexpected status {status} from {url}")]
    Status { url: String, status: u16 },

    /// Plugin activation failed.
    #[error("failed to activate {plugin}: {reason}")]
    Activation { plugin: String, reason: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for host collaborator operations.
pub type HostResult<T> = Result<T, HostError>;
