//! Local-site runtime for the Gutestrap updater.
//!
//! This crate provides the concrete collaborators the updater needs on a
//! real site:
//! - [`HttpMetadataSource`]: downloads the remote entry file
//! - [`FsMover`]: relocates an extracted package
//! - [`SiteRegistry`]: tracks installed plugins and their activation state
//! - [`UpdateCheckStore`]: persists the last update-check result

mod error;
pub mod headers;
mod http;
mod mover;
mod registry;
mod site;
mod store;

pub use error::{RuntimeError, RuntimeResult};
pub use headers::{parse_plugin_headers, read_plugin_headers};
pub use http::HttpMetadataSource;
pub use mover::FsMover;
pub use registry::{InstalledPlugin, SiteRegistry};
pub use site::Site;
pub use store::UpdateCheckStore;
