//! Plugin activation trait.

use std::path::Path;

use crate::HostResult;

/// Host view of which plugins are active.
pub trait PluginActivation {
    /// Returns true if the plugin is currently active.
    fn is_active(&self, plugin: &str) -> bool;

    /// Activates the plugin installed at `location`.
    ///
    /// # Errors
    ///
    /// Returns an error if the host refuses the activation.
    fn activate(&mut self, plugin: &str, location: &Path) -> HostResult<()>;
}
