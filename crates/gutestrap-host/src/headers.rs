//! Plugin header fields.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Header fields a plugin entry file can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HeaderField {
    /// Display name ("Plugin Name").
    Name,
    /// Plugin homepage ("Plugin URI").
    PluginUri,
    /// Declared version ("Version").
    Version,
    /// Short description ("Description").
    Description,
    /// Author name ("Author").
    Author,
    /// Author homepage ("Author URI").
    AuthorUri,
    /// Minimum host version ("Requires at least").
    RequiresWp,
    /// Minimum PHP version ("Requires PHP").
    RequiresPhp,
    /// Translation domain ("Text Domain").
    TextDomain,
    /// Custom update server ("Update URI").
    UpdateUri,
}

impl HeaderField {
    /// All known fields, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Name,
        Self::PluginUri,
        Self::Version,
        Self::Description,
        Self::Author,
        Self::AuthorUri,
        Self::RequiresWp,
        Self::RequiresPhp,
        Self::TextDomain,
        Self::UpdateUri,
    ];

    /// Returns the label used in the file header (e.g., "Plugin Name").
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Name => "Plugin Name",
            Self::PluginUri => "Plugin URI",
            Self::Version => "Version",
            Self::Description => "Description",
            Self::Author => "Author",
            Self::AuthorUri => "Author URI",
            Self::RequiresWp => "Requires at least",
            Self::RequiresPhp => "Requires PHP",
            Self::TextDomain => "Text Domain",
            Self::UpdateUri => "Update URI",
        }
    }
}

/// Header values read from a plugin entry file.
///
/// Absent headers are simply missing; no field is mandatory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginHeaders {
    fields: BTreeMap<HeaderField, String>,
}

impl PluginHeaders {
    /// Creates an empty header set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a header value. Empty values are ignored.
    pub fn insert(&mut self, field: HeaderField, value: impl Into<String>) {
        let value = value.into();
        if !value.is_empty() {
            self.fields.insert(field, value);
        }
    }

    /// Builder-style variant of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, field: HeaderField, value: impl Into<String>) -> Self {
        self.insert(field, value);
        self
    }

    /// Gets a header value.
    #[must_use]
    pub fn get(&self, field: HeaderField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    /// Returns true when no header was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of headers present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }
}
