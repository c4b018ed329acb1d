//! Filesystem relocation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use gutestrap_host::{FileMover, HostResult};
use tracing::debug;

/// Moves directories on the local filesystem.
///
/// Tries a rename first and falls back to copy-then-delete when the source
/// and target sit on different filesystems.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsMover;

impl FsMover {
    /// Creates a new filesystem mover.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FileMover for FsMover {
    fn move_dir(&self, from: &Path, to: &Path) -> HostResult<()> {
        if !from.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("source directory {} does not exist", from.display()),
            )
            .into());
        }

        if from == to {
            return Ok(());
        }

        if to.starts_with(from) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "cannot move {} into its own subdirectory {}",
                    from.display(),
                    to.display()
                ),
            )
            .into());
        }

        // A package extracted inside the previous install must leave it
        // before the previous install is removed.
        let staged = if from.starts_with(to) {
            let staging = staging_dir(to);
            debug!(path = %staging.display(), "staging package outside previous install");
            rename_or_copy(from, &staging)?;
            Some(staging)
        } else {
            None
        };
        let source = staged.as_deref().unwrap_or(from);

        if to.exists() {
            debug!(path = %to.display(), "removing previous install");
            fs::remove_dir_all(to)?;
        }

        if let Some(parent) = to.parent() {
            fs::create_dir_all(parent)?;
        }

        rename_or_copy(source, to)?;
        Ok(())
    }
}

/// Sibling of `to` used to hold a package while `to` is replaced.
fn staging_dir(to: &Path) -> PathBuf {
    let name = to
        .file_name()
        .map_or_else(|| "package".into(), |n| n.to_string_lossy());
    to.with_file_name(format!(".{name}.incoming"))
}

fn rename_or_copy(from: &Path, to: &Path) -> io::Result<()> {
    if to.exists() {
        fs::remove_dir_all(to)?;
    }

    if let Err(e) = fs::rename(from, to) {
        debug!(error = %e, "rename failed, copying instead");
        copy_dir_all(from, to)?;
        fs::remove_dir_all(from)?;
    }
    Ok(())
}

fn copy_dir_all(from: &Path, to: &Path) -> io::Result<()> {
    fs::create_dir_all(to)?;

    for entry in fs::read_dir(from)? {
        let entry = entry?;
        let target = to.join(entry.file_name());

        if entry.file_type()?.is_dir() {
            copy_dir_all(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), target)?;
        }
    }

    Ok(())
}
