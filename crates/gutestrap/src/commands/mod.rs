//! Subcommand implementations.

pub mod activation;
pub mod check;
pub mod info;
pub mod install;
pub mod status;

use anyhow::{Context, Result};

use gutestrap_runtime::{FsMover, Site};
use gutestrap_updater::UpdateResolver;

/// Builds a resolver wired to the site's collaborators.
fn resolver(site: &Site) -> Result<UpdateResolver> {
    let source = site
        .http_source()
        .context("failed to set up HTTP client")?;

    Ok(UpdateResolver::new(
        site.plugins_dir(),
        Box::new(source),
        Box::new(FsMover::new()),
    ))
}
