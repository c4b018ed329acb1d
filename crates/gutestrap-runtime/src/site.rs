//! Local site layout.
//!
//! A site is laid out as follows by default:
//! ```text
//! ~/.gutestrap/
//! ├── plugins/
//! │   └── gutestrap/
//! │       └── gutestrap.php
//! ├── registry.toml
//! └── update-check.json
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use gutestrap_config::{Config, SiteConfig};

use crate::{HttpMetadataSource, RuntimeError, RuntimeResult, SiteRegistry, UpdateCheckStore};

/// Resolved paths and settings of one local site.
#[derive(Debug, Clone)]
pub struct Site {
    root: PathBuf,
    plugins_dir: PathBuf,
    registry_file: PathBuf,
    update_check_file: PathBuf,
    timeout: Duration,
}

impl Site {
    /// Resolves the site described by a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if no site root is configured and the home directory
    /// cannot be determined.
    pub fn from_config(config: &Config) -> RuntimeResult<Self> {
        let root = match &config.site.root {
            Some(root) => root.clone(),
            None => Self::default_root()?,
        };
        Ok(Self::with_root(root, config))
    }

    /// Resolves the site against an explicit root, ignoring `site.root`.
    #[must_use]
    pub fn with_root(root: impl Into<PathBuf>, config: &Config) -> Self {
        let root = root.into();
        Self {
            plugins_dir: SiteConfig::resolve(&root, &config.site.plugins_dir),
            registry_file: SiteConfig::resolve(&root, &config.site.registry_file),
            update_check_file: SiteConfig::resolve(&root, &config.site.update_check_file),
            timeout: Duration::from_secs(config.http.timeout_secs),
            root,
        }
    }

    /// Returns the default site root (`~/.gutestrap`).
    fn default_root() -> RuntimeResult<PathBuf> {
        let home = dirs::home_dir().ok_or(RuntimeError::NoHomeDir)?;
        Ok(home.join(".gutestrap"))
    }

    /// Creates the plugins directory if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn ensure_layout(&self) -> RuntimeResult<()> {
        std::fs::create_dir_all(&self.plugins_dir).map_err(|source| {
            RuntimeError::StorageCreation {
                path: self.plugins_dir.clone(),
                source,
            }
        })
    }

    /// Returns the site root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the plugins directory.
    #[must_use]
    pub fn plugins_dir(&self) -> &Path {
        &self.plugins_dir
    }

    /// Returns the activation registry file.
    #[must_use]
    pub fn registry_file(&self) -> &Path {
        &self.registry_file
    }

    /// Returns the stored update-check file.
    #[must_use]
    pub fn update_check_file(&self) -> &Path {
        &self.update_check_file
    }

    /// Returns the HTTP request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Opens the site's activation registry.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry file cannot be read or parsed.
    pub fn registry(&self) -> RuntimeResult<SiteRegistry> {
        SiteRegistry::open(&self.registry_file)
    }

    /// Returns the site's update-check store.
    #[must_use]
    pub fn store(&self) -> UpdateCheckStore {
        UpdateCheckStore::new(&self.update_check_file)
    }

    /// Builds an HTTP metadata source using the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn http_source(&self) -> RuntimeResult<HttpMetadataSource> {
        HttpMetadataSource::new(self.timeout)
    }
}
