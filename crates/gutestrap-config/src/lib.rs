//! Configuration for the Gutestrap updater.
//!
//! This crate holds the compiled-in remote source and plugin identity, and
//! loads the `gutestrap.toml` file describing the local site layout.

mod error;
mod loader;
mod remote;
mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{
    CONFIG_FILE_NAME, find_and_load_config_from, load_config, load_config_or_default,
};
pub use remote::{
    BRANCH, PLUGIN_ENTRY_FILE, PLUGIN_SLUG, PluginIdentity, REPOSITORY_URL, RemoteSource,
};
pub use schema::{Config, HttpConfig, SiteConfig};
