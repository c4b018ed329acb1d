//! Info command.

use anyhow::{Result, bail};
use clap::Args;

use gutestrap_runtime::Site;
use gutestrap_updater::descriptor::{SECTION_CHANGELOG, SECTION_DESCRIPTION, SECTION_INSTALLATION};
use gutestrap_updater::{PLUGIN_INFORMATION_ACTION, UpdateCycle};

/// Arguments for the info command.
#[derive(Debug, Args)]
pub struct InfoArgs {
    /// Also print the HTML sections
    #[arg(short, long)]
    pub sections: bool,
}

/// Runs the info command.
pub fn run(args: &InfoArgs, site: &Site) -> Result<()> {
    let resolver = super::resolver(site)?;
    let slug = resolver.identity().slug().to_string();

    let mut cycle = UpdateCycle::new();
    let Some(descriptor) =
        resolver.resolve_details_view(&mut cycle, None, PLUGIN_INFORMATION_ACTION, &slug)
    else {
        bail!("remote plugin metadata for {slug} is unavailable");
    };

    let unknown = "unknown";
    println!(
        "{} {}",
        descriptor.name.as_deref().unwrap_or(&slug),
        descriptor.version.as_deref().unwrap_or(unknown)
    );
    if let Some(author) = &descriptor.author {
        println!("Author:   {author}");
    }
    if let Some(url) = &descriptor.url {
        println!("Homepage: {url}");
    }
    if let Some(requires) = &descriptor.requires {
        println!("Requires: {requires}");
    }
    if let Some(php) = &descriptor.require_php {
        println!("PHP:      {php}");
    }
    println!("Package:  {}", descriptor.package);

    if args.sections {
        for name in [SECTION_DESCRIPTION, SECTION_INSTALLATION, SECTION_CHANGELOG] {
            if let Some(html) = descriptor.section(name) {
                println!();
                println!("[{name}]");
                println!("{html}");
            }
        }
    }

    Ok(())
}
