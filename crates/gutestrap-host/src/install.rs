//! Installer outcome.

use std::path::PathBuf;

/// What the host installer produced for one package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOutcome {
    /// Identifier of the installed item (slug or basename).
    pub plugin: String,

    /// Where the package was extracted. Later installer steps read this to
    /// locate the plugin.
    pub destination: PathBuf,
}

impl InstallOutcome {
    /// Creates a new install outcome.
    #[must_use]
    pub fn new(plugin: impl Into<String>, destination: impl Into<PathBuf>) -> Self {
        Self {
            plugin: plugin.into(),
            destination: destination.into(),
        }
    }
}
