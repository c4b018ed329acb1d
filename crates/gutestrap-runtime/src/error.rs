//! Error types for the local-site runtime.

use std::path::PathBuf;

/// Result type for runtime operations.
pub type RuntimeResult<T> = Result<T, RuntimeError>;

/// Runtime error types.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// Failed to create a site directory.
    #[error("failed to create site directory: {path}")]
    StorageCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Home directory could not be determined for the default site root.
    #[error("could not determine home directory")]
    NoHomeDir,

    /// Plugin is not recorded in the registry.
    #[error("plugin not installed: {name}")]
    PluginNotInstalled { name: String },

    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),

    /// Failed to start the async runtime backing the HTTP client.
    #[error("failed to start async runtime")]
    AsyncRuntime(#[source] std::io::Error),

    /// Failed to read registry file.
    #[error("failed to read registry file")]
    RegistryRead(#[source] std::io::Error),

    /// Failed to write registry file.
    #[error("failed to write registry file")]
    RegistryWrite(#[source] std::io::Error),

    /// Failed to parse registry file.
    #[error("failed to parse registry file")]
    RegistryParse(#[source] toml::de::Error),

    /// Failed to serialize registry file.
    #[error("failed to serialize registry")]
    RegistrySerialize(#[source] toml::ser::Error),

    /// Failed to read or write the stored update check.
    #[error("failed to access update check file {path}")]
    StoreIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stored update check is not valid JSON.
    #[error("failed to parse update check file {path}")]
    StoreParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plugin_not_installed_display() {
        let err = RuntimeError::PluginNotInstalled {
            name: "gutestrap/gutestrap.php".to_string(),
        };
        assert_eq!(err.to_string(), "plugin not installed: gutestrap/gutestrap.php");
    }

    #[test]
    fn test_store_io_display() {
        let err = RuntimeError::StoreIo {
            path: PathBuf::from("/srv/update-check.json"),
            source: std::io::Error::other("denied"),
        };
        assert_eq!(
            err.to_string(),
            "failed to access update check file /srv/update-check.json"
        );
    }
}
