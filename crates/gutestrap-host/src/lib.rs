//! Host-side model for the Gutestrap updater.
//!
//! This crate describes what the plugin host hands to the updater and what
//! it expects back:
//! - [`UpdateCheckResult`]: the aggregate of one update-check pass
//! - [`RemotePluginDescriptor`]: metadata of a remotely available version
//! - [`InstallOutcome`]: where the installer extracted a package
//! - [`MetadataSource`], [`PluginActivation`], [`FileMover`]: collaborators

mod descriptor;
mod error;
mod headers;
mod install;
mod traits;
mod update_check;

pub use descriptor::RemotePluginDescriptor;
pub use error::{HostError, HostResult};
pub use headers::{HeaderField, PluginHeaders};
pub use install::InstallOutcome;
pub use traits::activation::PluginActivation;
pub use traits::metadata::MetadataSource;
pub use traits::mover::FileMover;
pub use update_check::{UpdateCheckResult, UpdateOutcome};
