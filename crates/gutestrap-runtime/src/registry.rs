//! Site registry of installed plugins and their activation state.
//!
//! The registry is stored as a TOML file (`registry.toml` under the site root
//! by default).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use gutestrap_host::{HostError, HostResult, PluginActivation};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{RuntimeError, RuntimeResult};

/// Information about an installed plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstalledPlugin {
    /// Host basename (e.g., "gutestrap/gutestrap.php").
    pub basename: String,
    /// Installed version, as declared in the entry file.
    pub version: Option<String>,
    /// Installation directory.
    pub path: PathBuf,
    /// Whether the plugin is active.
    #[serde(default)]
    pub active: bool,
    /// Installation timestamp.
    pub installed_at: DateTime<Utc>,
    /// Last activation timestamp.
    pub activated_at: Option<DateTime<Utc>>,
}

/// The registry file format.
#[derive(Debug, Default, Serialize, Deserialize)]
struct RegistryFile {
    #[serde(default)]
    plugins: BTreeMap<String, InstalledPlugin>,
}

/// Registry of installed plugins for one site.
pub struct SiteRegistry {
    path: PathBuf,
    data: RegistryFile,
}

impl SiteRegistry {
    /// Opens a registry, loading it from disk if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry file exists but cannot be read or parsed.
    pub fn open(path: impl Into<PathBuf>) -> RuntimeResult<Self> {
        let path = path.into();
        let data = Self::load_from_path(&path)?;
        Ok(Self { path, data })
    }

    fn load_from_path(path: &Path) -> RuntimeResult<RegistryFile> {
        if !path.exists() {
            return Ok(RegistryFile::default());
        }

        let content = std::fs::read_to_string(path).map_err(RuntimeError::RegistryRead)?;
        toml::from_str(&content).map_err(RuntimeError::RegistryParse)
    }

    /// Saves the registry to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry cannot be serialized or written.
    pub fn save(&self) -> RuntimeResult<()> {
        let content =
            toml::to_string_pretty(&self.data).map_err(RuntimeError::RegistrySerialize)?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(RuntimeError::RegistryWrite)?;
        }
        std::fs::write(&self.path, content).map_err(RuntimeError::RegistryWrite)?;
        Ok(())
    }

    /// Returns the registry file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lists all installed plugins.
    #[must_use]
    pub fn list(&self) -> Vec<&InstalledPlugin> {
        self.data.plugins.values().collect()
    }

    /// Gets an installed plugin by basename.
    #[must_use]
    pub fn get(&self, basename: &str) -> Option<&InstalledPlugin> {
        self.data.plugins.get(basename)
    }

    /// Records an install, keeping the activation state of a previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry cannot be saved.
    pub fn record_install(
        &mut self,
        basename: &str,
        version: Option<String>,
        path: impl Into<PathBuf>,
    ) -> RuntimeResult<&InstalledPlugin> {
        let path = path.into();
        let now = Utc::now();

        let entry = self
            .data
            .plugins
            .entry(basename.to_string())
            .and_modify(|p| {
                p.version.clone_from(&version);
                p.path.clone_from(&path);
                p.installed_at = now;
            })
            .or_insert_with(|| InstalledPlugin {
                basename: basename.to_string(),
                version: version.clone(),
                path: path.clone(),
                active: false,
                installed_at: now,
                activated_at: None,
            });

        info!(plugin = %entry.basename, version = ?entry.version, "recorded install");

        self.save()?;
        self.get(basename)
            .ok_or_else(|| RuntimeError::PluginNotInstalled {
                name: basename.to_string(),
            })
    }

    /// Marks an installed plugin as active at `location`.
    ///
    /// # Errors
    ///
    /// Returns an error if the plugin is not installed or the registry cannot
    /// be saved.
    pub fn set_active(&mut self, basename: &str, location: &Path) -> RuntimeResult<()> {
        let plugin = self.data.plugins.get_mut(basename).ok_or_else(|| {
            RuntimeError::PluginNotInstalled {
                name: basename.to_string(),
            }
        })?;

        plugin.active = true;
        plugin.path = location.to_path_buf();
        plugin.activated_at = Some(Utc::now());

        info!(plugin = %basename, path = %location.display(), "activated plugin");
        self.save()
    }

    /// Marks an installed plugin as inactive.
    ///
    /// # Errors
    ///
    /// Returns an error if the plugin is not installed or the registry cannot
    /// be saved.
    pub fn deactivate(&mut self, basename: &str) -> RuntimeResult<()> {
        let plugin = self.data.plugins.get_mut(basename).ok_or_else(|| {
            RuntimeError::PluginNotInstalled {
                name: basename.to_string(),
            }
        })?;

        plugin.active = false;

        info!(plugin = %basename, "deactivated plugin");
        self.save()
    }
}

impl PluginActivation for SiteRegistry {
    fn is_active(&self, plugin: &str) -> bool {
        self.get(plugin).is_some_and(|p| p.active)
    }

    fn activate(&mut self, plugin: &str, location: &Path) -> HostResult<()> {
        self.set_active(plugin, location)
            .map_err(|e| HostError::Activation {
                plugin: plugin.to_string(),
                reason: e.to_string(),
            })
    }
}
