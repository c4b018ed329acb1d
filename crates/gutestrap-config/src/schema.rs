//! Configuration schema.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Local site layout.
    #[serde(default)]
    pub site: SiteConfig,

    /// HTTP client settings.
    #[serde(default)]
    pub http: HttpConfig,
}

/// Local site layout.
///
/// Relative paths are resolved against `root`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site root (defaults to `~/.gutestrap` when unset).
    pub root: Option<PathBuf>,

    /// Directory holding installed plugins.
    #[serde(default = "default_plugins_dir")]
    pub plugins_dir: PathBuf,

    /// Activation registry file.
    #[serde(default = "default_registry_file")]
    pub registry_file: PathBuf,

    /// Stored update-check result.
    #[serde(default = "default_update_check_file")]
    pub update_check_file: PathBuf,
}

impl SiteConfig {
    /// Resolves a configured path against the given site root.
    #[must_use]
    pub fn resolve(root: &Path, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            root.join(path)
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root: None,
            plugins_dir: default_plugins_dir(),
            registry_file: default_registry_file(),
            update_check_file: default_update_check_file(),
        }
    }
}

fn default_plugins_dir() -> PathBuf {
    PathBuf::from("plugins")
}

fn default_registry_file() -> PathBuf {
    PathBuf::from("registry.toml")
}

fn default_update_check_file() -> PathBuf {
    PathBuf::from("update-check.json")
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.site.root.is_none());
        assert_eq!(config.site.plugins_dir, PathBuf::from("plugins"));
        assert_eq!(config.site.registry_file, PathBuf::from("registry.toml"));
        assert_eq!(
            config.site.update_check_file,
            PathBuf::from("update-check.json")
        );
        assert_eq!(config.http.timeout_secs, 10);
    }

    #[test]
    fn test_deserialize_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.site.plugins_dir, PathBuf::from("plugins"));
        assert_eq!(config.http.timeout_secs, 10);
    }

    #[test]
    fn test_deserialize_full() {
        let toml = r#"
            [site]
            root = "/srv/site"
            plugins_dir = "wp-content/plugins"
            registry_file = "/var/lib/gutestrap/registry.toml"
            update_check_file = "state/update-check.json"

            [http]
            timeout_secs = 30
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.site.root, Some(PathBuf::from("/srv/site")));
        assert_eq!(
            config.site.plugins_dir,
            PathBuf::from("wp-content/plugins")
        );
        assert_eq!(config.http.timeout_secs, 30);
    }

    #[test]
    fn test_remote_settings_are_not_configurable() {
        let toml = r#"
            [remote]
            repository = "https://github.com/someone/else"
        "#;

        // Unknown tables are ignored; the remote source stays compiled in.
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.site.plugins_dir, PathBuf::from("plugins"));
    }

    #[test]
    fn test_resolve_relative_and_absolute() {
        let root = Path::new("/srv/site");
        assert_eq!(
            SiteConfig::resolve(root, Path::new("plugins")),
            PathBuf::from("/srv/site/plugins")
        );
        assert_eq!(
            SiteConfig::resolve(root, Path::new("/tmp/registry.toml")),
            PathBuf::from("/tmp/registry.toml")
        );
    }

    #[test]
    fn test_serialize_config() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("[site]"));
        assert!(toml_str.contains("plugins_dir = \"plugins\""));
    }
}
