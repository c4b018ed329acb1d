//! Plugin header parsing.
//!
//! A plugin's entry file declares its metadata in a leading comment block:
//!
//! ```text
//! <?php
//! /**
//!  * Plugin Name: Gutestrap
//!  * Version:     2.4.0
//!  */
//! ```

use std::path::Path;
use std::sync::LazyLock;

use gutestrap_host::{HeaderField, PluginHeaders};
use regex::Regex;

/// Only this many leading bytes are scanned for headers.
pub const HEADER_SCAN_LIMIT: usize = 8 * 1024;

static HEADER_PATTERNS: LazyLock<Vec<(HeaderField, Regex)>> = LazyLock::new(|| {
    HeaderField::ALL
        .iter()
        .map(|field| {
            let pattern = format!(
                r"(?mi)^(?:[ \t]*<\?php)?[ \t/*#@]*{}:(.*)$",
                regex::escape(field.label())
            );
            (*field, Regex::new(&pattern).expect("invalid regex"))
        })
        .collect()
});

/// Extracts plugin headers from the contents of an entry file.
#[must_use]
pub fn parse_plugin_headers(content: &str) -> PluginHeaders {
    let mut end = content.len().min(HEADER_SCAN_LIMIT);
    while !content.is_char_boundary(end) {
        end -= 1;
    }
    let head = &content[..end];

    let mut headers = PluginHeaders::new();
    for (field, regex) in HEADER_PATTERNS.iter() {
        if let Some(value) = regex.captures(head).and_then(|c| c.get(1)) {
            headers.insert(*field, cleanup_header_value(value.as_str()));
        }
    }
    headers
}

/// Reads plugin headers from an entry file on disk.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn read_plugin_headers(path: &Path) -> std::io::Result<PluginHeaders> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_plugin_headers(&content))
}

fn cleanup_header_value(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .strip_suffix("*/")
        .unwrap_or(trimmed)
        .trim()
        .to_string()
}
