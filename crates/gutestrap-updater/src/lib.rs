//! Self-update resolution for the Gutestrap plugin.
//!
//! [`UpdateResolver`] answers the host's update questions: whether a newer
//! version exists, what the plugin-information screen shows, and where a
//! freshly installed package ends up. [`UpdateCycle`] carries the fetch memo
//! for one update-check cycle.

mod cycle;
pub mod descriptor;
mod error;
mod resolver;
mod version;

pub use cycle::{CycleState, UpdateCycle};
pub use error::{UpdaterError, UpdaterResult};
pub use resolver::{PLUGIN_INFORMATION_ACTION, UpdateResolver};
pub use version::{is_newer, parse_version};
