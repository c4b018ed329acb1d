//! Persistence of the last update-check result.

use std::path::{Path, PathBuf};

use gutestrap_host::UpdateCheckResult;
use tracing::debug;

use crate::{RuntimeError, RuntimeResult};

/// Stores the site's update-check aggregate as JSON.
#[derive(Debug, Clone)]
pub struct UpdateCheckStore {
    path: PathBuf,
}

impl UpdateCheckStore {
    /// Creates a store backed by the given file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored result, or an empty one if nothing was stored yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(&self) -> RuntimeResult<UpdateCheckResult> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no stored update check");
            return Ok(UpdateCheckResult::default());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|source| {
            RuntimeError::StoreIo {
                path: self.path.clone(),
                source,
            }
        })?;

        serde_json::from_str(&content).map_err(|source| RuntimeError::StoreParse {
            path: self.path.clone(),
            source,
        })
    }

    /// Writes the result, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, result: &UpdateCheckResult) -> RuntimeResult<()> {
        let content = serde_json::to_string_pretty(result).map_err(|source| {
            RuntimeError::StoreParse {
                path: self.path.clone(),
                source,
            }
        })?;

        let io_err = |source| RuntimeError::StoreIo {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(&self.path, content).map_err(io_err)?;

        debug!(path = %self.path.display(), "stored update check");
        Ok(())
    }
}
