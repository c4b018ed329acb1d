//! CLI definition.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use gutestrap_config::{Config, load_config, load_config_or_default};
use gutestrap_runtime::Site;

use crate::commands;

/// Keep the Gutestrap plugin in step with the head of its repository branch.
#[derive(Debug, Parser)]
#[command(name = "gutestrap")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the configuration file (defaults to the nearest gutestrap.toml)
    #[arg(short, long, global = true, env = "GUTESTRAP_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check the repository for a newer version
    Check(commands::check::CheckArgs),

    /// Show the plugin information screen
    Info(commands::info::InfoArgs),

    /// Finish installing an extracted package
    Install(commands::install::InstallArgs),

    /// Activate the installed plugin
    Activate,

    /// Deactivate the installed plugin
    Deactivate,

    /// Show the installed plugin and the last update check
    Status,
}

impl Cli {
    /// Runs the CLI command.
    pub fn run(self) -> Result<()> {
        let config = self.load_config()?;
        let site = Site::from_config(&config).context("failed to resolve site layout")?;

        match self.command {
            Commands::Check(args) => commands::check::run(&args, &site),
            Commands::Info(args) => commands::info::run(&args, &site),
            Commands::Install(args) => commands::install::run(&args, &site),
            Commands::Activate => commands::activation::activate(&site),
            Commands::Deactivate => commands::activation::deactivate(&site),
            Commands::Status => commands::status::run(&site),
        }
    }

    fn load_config(&self) -> Result<Config> {
        if let Some(path) = &self.config {
            return load_config(path)
                .with_context(|| format!("failed to load {}", path.display()));
        }

        let cwd = std::env::current_dir().context("failed to get current directory")?;
        load_config_or_default(cwd).context("failed to load configuration")
    }
}
