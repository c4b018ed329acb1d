//! Fixed remote source and plugin identity.
//!
//! The updater always tracks one branch of one repository. These values are
//! compiled in and are deliberately absent from `gutestrap.toml`.

use std::collections::BTreeMap;

use crate::{ConfigError, ConfigResult};

/// Repository the plugin is distributed from.
pub const REPOSITORY_URL: &str = "https://github.com/gutestrap/gutestrap";

/// Branch whose head is treated as the latest release.
pub const BRANCH: &str = "master";

/// Stable plugin identifier.
pub const PLUGIN_SLUG: &str = "gutestrap";

/// Plugin entry file, relative to the plugin directory.
pub const PLUGIN_ENTRY_FILE: &str = "gutestrap.php";

/// Identity of the locally installed plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginIdentity {
    slug: String,
    entry_file: String,
}

impl PluginIdentity {
    /// Creates an identity from a slug and entry file.
    #[must_use]
    pub fn new(slug: impl Into<String>, entry_file: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            entry_file: entry_file.into(),
        }
    }

    /// The compiled-in identity of this plugin.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(PLUGIN_SLUG, PLUGIN_ENTRY_FILE)
    }

    /// Returns the slug (e.g., "gutestrap").
    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Returns the entry file name (e.g., "gutestrap.php").
    #[must_use]
    pub fn entry_file(&self) -> &str {
        &self.entry_file
    }

    /// Returns the host basename (e.g., "gutestrap/gutestrap.php").
    #[must_use]
    pub fn basename(&self) -> String {
        format!("{}/{}", self.slug, self.entry_file)
    }

    /// Checks whether a host identifier names this plugin.
    ///
    /// Hosts use either the bare slug or the basename depending on the hook.
    #[must_use]
    pub fn matches(&self, identifier: &str) -> bool {
        identifier == self.slug || identifier == self.basename()
    }
}

impl Default for PluginIdentity {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Remote repository branch the plugin metadata is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteSource {
    repository: String,
    branch: String,
    owner: String,
    repo: String,
}

impl RemoteSource {
    /// Creates a remote source for a GitHub repository and branch.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository URL is not a GitHub URL.
    pub fn new(repository: &str, branch: &str) -> ConfigResult<Self> {
        let (owner, repo) = parse_github_url(repository)
            .ok_or_else(|| ConfigError::UnsupportedRepository(repository.to_string()))?;

        if branch.is_empty() {
            return Err(ConfigError::Invalid("branch must not be empty".to_string()));
        }

        Ok(Self {
            repository: repository.trim_end_matches('/').trim_end_matches(".git").to_string(),
            branch: branch.to_string(),
            owner,
            repo,
        })
    }

    /// The compiled-in remote source.
    ///
    /// # Panics
    ///
    /// Panics if the built-in repository constant is not a GitHub URL.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(REPOSITORY_URL, BRANCH).expect("built-in repository is a GitHub URL")
    }

    /// Returns the repository URL.
    #[must_use]
    pub fn repository(&self) -> &str {
        &self.repository
    }

    /// Returns the tracked branch.
    #[must_use]
    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// Base URL serving raw files of the tracked branch.
    #[must_use]
    pub fn raw_base_url(&self) -> String {
        format!(
            "https://raw.githubusercontent.com/{}/{}/{}",
            self.owner, self.repo, self.branch
        )
    }

    /// URL of a file on the tracked branch.
    #[must_use]
    pub fn file_url(&self, path: &str) -> String {
        format!("{}/{}", self.raw_base_url(), path.trim_start_matches('/'))
    }

    /// Download URL of the branch archive.
    #[must_use]
    pub fn archive_url(&self) -> String {
        format!("{}/archive/refs/heads/{}.zip", self.repository, self.branch)
    }

    /// Commit log of the tracked branch.
    #[must_use]
    pub fn changelog_url(&self) -> String {
        format!("{}/commits/{}", self.repository, self.branch)
    }

    /// Icon URLs keyed by size tag.
    #[must_use]
    pub fn icons(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("1x".to_string(), self.file_url("assets/icon-128x128.png")),
            ("2x".to_string(), self.file_url("assets/icon-256x256.png")),
        ])
    }

    /// Banner URLs keyed by size tag.
    #[must_use]
    pub fn banners(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("low".to_string(), self.file_url("assets/banner-772x250.png")),
            ("high".to_string(), self.file_url("assets/banner-1544x500.png")),
        ])
    }
}

impl Default for RemoteSource {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Parses a GitHub URL into (owner, repo).
fn parse_github_url(url: &str) -> Option<(String, String)> {
    let url = url.trim_end_matches('/');

    // Handle both https://github.com/owner/repo and git@github.com:owner/repo
    let path = url
        .strip_prefix("https://github.com/")
        .or_else(|| url.strip_prefix("git@github.com:"))?;

    let path = path.trim_end_matches(".git");
    let mut parts = path.split('/').filter(|p| !p.is_empty());

    match (parts.next(), parts.next()) {
        (Some(owner), Some(repo)) => Some((owner.to_string(), repo.to_string())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_github_url_https() {
        let (owner, repo) = parse_github_url("https://github.com/gutestrap/gutestrap").unwrap();
        assert_eq!(owner, "gutestrap");
        assert_eq!(repo, "gutestrap");
    }

    #[test]
    fn test_parse_github_url_ssh_with_git_extension() {
        let (owner, repo) = parse_github_url("git@github.com:acme/grid.git").unwrap();
        assert_eq!(owner, "acme");
        assert_eq!(repo, "grid");
    }

    #[test]
    fn test_parse_github_url_invalid() {
        assert!(parse_github_url("https://gitlab.com/foo/bar").is_none());
        assert!(parse_github_url("https://github.com/only-owner").is_none());
    }

    #[test]
    fn test_identity_basename() {
        let identity = PluginIdentity::builtin();
        assert_eq!(identity.slug(), "gutestrap");
        assert_eq!(identity.basename(), "gutestrap/gutestrap.php");
    }

    #[test]
    fn test_identity_matches_slug_and_basename() {
        let identity = PluginIdentity::builtin();
        assert!(identity.matches("gutestrap"));
        assert!(identity.matches("gutestrap/gutestrap.php"));
        assert!(!identity.matches("other-plugin"));
        assert!(!identity.matches("other-plugin/gutestrap.php"));
    }

    #[test]
    fn test_builtin_remote_urls() {
        let remote = RemoteSource::builtin();
        assert_eq!(
            remote.raw_base_url(),
            "https://raw.githubusercontent.com/gutestrap/gutestrap/master"
        );
        assert_eq!(
            remote.file_url("gutestrap.php"),
            "https://raw.githubusercontent.com/gutestrap/gutestrap/master/gutestrap.php"
        );
        assert_eq!(
            remote.archive_url(),
            "https://github.com/gutestrap/gutestrap/archive/refs/heads/master.zip"
        );
        assert_eq!(
            remote.changelog_url(),
            "https://github.com/gutestrap/gutestrap/commits/master"
        );
    }

    #[test]
    fn test_remote_normalizes_repository() {
        let remote = RemoteSource::new("https://github.com/acme/grid.git", "develop").unwrap();
        assert_eq!(remote.repository(), "https://github.com/acme/grid");
        assert_eq!(remote.branch(), "develop");
    }

    #[test]
    fn test_remote_rejects_non_github() {
        let result = RemoteSource::new("https://example.com/acme/grid", "master");
        assert!(matches!(result, Err(ConfigError::UnsupportedRepository(_))));
    }

    #[test]
    fn test_remote_rejects_empty_branch() {
        let result = RemoteSource::new("https://github.com/acme/grid", "");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_assets() {
        let remote = RemoteSource::builtin();
        assert_eq!(remote.icons().len(), 2);
        assert!(remote.icons()["2x"].ends_with("assets/icon-256x256.png"));
        assert!(remote.banners()["high"].ends_with("assets/banner-1544x500.png"));
    }
}
