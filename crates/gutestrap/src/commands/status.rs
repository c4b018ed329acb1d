//! Status command.

use anyhow::{Context, Result};

use gutestrap_config::PluginIdentity;
use gutestrap_host::UpdateOutcome;
use gutestrap_runtime::Site;

/// Runs the status command.
pub fn run(site: &Site) -> Result<()> {
    let basename = PluginIdentity::builtin().basename();
    let registry = site.registry().context("failed to load site registry")?;

    match registry.get(&basename) {
        Some(plugin) => {
            println!(
                "{} {} ({})",
                plugin.basename,
                plugin.version.as_deref().unwrap_or("(unknown version)"),
                if plugin.active { "active" } else { "inactive" }
            );
            println!("  path:      {}", plugin.path.display());
            println!(
                "  installed: {}",
                plugin.installed_at.format("%Y-%m-%d %H:%M:%S UTC")
            );
        }
        None => println!("{basename} is not installed"),
    }

    let aggregate = site
        .store()
        .load()
        .context("failed to load stored update check")?;

    let Some(last_checked) = aggregate.last_checked else {
        println!("Never checked for updates");
        return Ok(());
    };

    let when = last_checked.format("%Y-%m-%d %H:%M:%S UTC");
    match aggregate.outcome(&basename) {
        Some(UpdateOutcome::UpdateAvailable(descriptor)) => println!(
            "Update available: {} (checked {when})",
            descriptor.version.as_deref().unwrap_or("unknown")
        ),
        Some(UpdateOutcome::NoUpdate(_)) | None => println!("No update pending (checked {when})"),
    }

    Ok(())
}
