//! Install command.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use tracing::warn;

use gutestrap_host::{HeaderField, InstallOutcome};
use gutestrap_runtime::{Site, read_plugin_headers};

/// Arguments for the install command.
#[derive(Debug, Args)]
pub struct InstallArgs {
    /// Directory the package was extracted to
    #[arg(long)]
    pub from: PathBuf,

    /// Identifier of the installed item (defaults to this plugin's basename)
    #[arg(short, long)]
    pub plugin: Option<String>,

    /// Report the install as failed
    #[arg(long)]
    pub failed: bool,
}

/// Runs the install command.
pub fn run(args: &InstallArgs, site: &Site) -> Result<()> {
    site.ensure_layout()
        .context("failed to prepare site directories")?;

    let resolver = super::resolver(site)?;
    let identity = resolver.identity().clone();
    let plugin = args.plugin.clone().unwrap_or_else(|| identity.basename());

    let mut registry = site.registry().context("failed to load site registry")?;
    let mut outcome = InstallOutcome::new(&plugin, &args.from);

    let succeeded = resolver.post_install(&mut registry, !args.failed, &mut outcome);

    if !identity.matches(&plugin) {
        println!("{plugin} is not managed here; left at {}", outcome.destination.display());
        return Ok(());
    }

    if !succeeded {
        bail!("installer reported failure for {plugin}");
    }

    let entry_file = outcome.destination.join(identity.entry_file());
    if !entry_file.is_file() {
        bail!(
            "{plugin} was not installed: {} is missing",
            entry_file.display()
        );
    }

    let version = match read_plugin_headers(&entry_file) {
        Ok(headers) => headers.get(HeaderField::Version).map(str::to_string),
        Err(e) => {
            warn!(path = %entry_file.display(), error = %e, "failed to read installed plugin headers");
            None
        }
    };

    let installed = registry
        .record_install(&identity.basename(), version, &outcome.destination)
        .context("failed to record install")?;

    println!(
        "Installed {} {} at {}",
        installed.basename,
        installed.version.as_deref().unwrap_or("(unknown version)"),
        installed.path.display()
    );
    if installed.active {
        println!("Plugin is active");
    }

    Ok(())
}
