//! Remote plugin descriptor.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Metadata describing one remotely available version of the plugin.
///
/// Built fresh on every fetch. Fields the remote document does not declare
/// stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemotePluginDescriptor {
    /// Stable plugin identifier (e.g., "gutestrap").
    pub slug: String,

    /// Host basename (e.g., "gutestrap/gutestrap.php").
    pub plugin: String,

    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Latest available version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Download URL of the distributable archive.
    pub package: String,

    /// Plugin homepage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Author as declared in the header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Minimum host version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires: Option<String>,

    /// Minimum PHP version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_php: Option<String>,

    /// Icon URLs keyed by size tag.
    #[serde(default)]
    pub icons: BTreeMap<String, String>,

    /// Banner URLs keyed by size tag.
    #[serde(default)]
    pub banners: BTreeMap<String, String>,

    /// HTML sections, only populated for the details view.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub sections: BTreeMap<String, String>,
}

impl RemotePluginDescriptor {
    /// Returns a section by name.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&str> {
        self.sections.get(name).map(String::as_str)
    }
}
