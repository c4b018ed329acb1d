//! Activate and deactivate commands.

use anyhow::{Context, Result, bail};

use gutestrap_config::PluginIdentity;
use gutestrap_runtime::Site;

/// Runs the activate command.
pub fn activate(site: &Site) -> Result<()> {
    let basename = PluginIdentity::builtin().basename();
    let mut registry = site.registry().context("failed to load site registry")?;

    let Some(path) = registry.get(&basename).map(|p| p.path.clone()) else {
        bail!("{basename} is not installed");
    };

    registry
        .set_active(&basename, &path)
        .with_context(|| format!("failed to activate {basename}"))?;

    println!("Activated {basename}");
    Ok(())
}

/// Runs the deactivate command.
pub fn deactivate(site: &Site) -> Result<()> {
    let basename = PluginIdentity::builtin().basename();
    let mut registry = site.registry().context("failed to load site registry")?;

    registry
        .deactivate(&basename)
        .with_context(|| format!("failed to deactivate {basename}"))?;

    println!("Deactivated {basename}");
    Ok(())
}
