//! Version precedence.
//!
//! Host version strings are looser than semver ("2.4", "v2.4.0"), so they are
//! normalized before comparison.

use semver::Version;
use tracing::warn;

use crate::{UpdaterError, UpdaterResult};

/// Parses a host version string.
///
/// A leading `v` is dropped, leading zeros are stripped from numeric
/// components and missing minor/patch components are padded with zeros.
/// Components past the patch number become build metadata, which still
/// orders "1.2.3.5" after "1.2.3.4". Pre-release and build suffixes are kept.
///
/// # Errors
///
/// Returns an error if the normalized string is not valid semver.
pub fn parse_version(raw: &str) -> UpdaterResult<Version> {
    let trimmed = raw.trim();
    let trimmed = trimmed
        .strip_prefix('v')
        .or_else(|| trimmed.strip_prefix('V'))
        .unwrap_or(trimmed);

    let split = trimmed.find(['-', '+']).unwrap_or(trimmed.len());
    let (core, suffix) = trimmed.split_at(split);
    let (pre, build) = suffix.split_at(suffix.find('+').unwrap_or(suffix.len()));

    let mut components: Vec<&str> = core.split('.').map(strip_leading_zeros).collect();
    let extra = if components.len() > 3 {
        components.split_off(3)
    } else {
        Vec::new()
    };
    components.resize(3, "0");

    let mut build_ids = extra;
    if let Some(existing) = build.strip_prefix('+') {
        build_ids.push(existing);
    }

    let mut normalized = format!("{}{pre}", components.join("."));
    if !build_ids.is_empty() {
        normalized.push('+');
        normalized.push_str(&build_ids.join("."));
    }

    Version::parse(&normalized).map_err(|source| UpdaterError::InvalidVersion {
        version: raw.to_string(),
        source,
    })
}

fn strip_leading_zeros(component: &str) -> &str {
    if component.len() > 1 && component.bytes().all(|b| b.is_ascii_digit()) {
        let stripped = component.trim_start_matches('0');
        if stripped.is_empty() { "0" } else { stripped }
    } else {
        component
    }
}

/// Returns true if `remote` is strictly newer than `installed`.
///
/// Unparseable versions are never newer.
pub fn is_newer(remote: &str, installed: &str) -> bool {
    let (remote_version, installed_version) = match (parse_version(remote), parse_version(installed))
    {
        (Ok(r), Ok(i)) => (r, i),
        (Err(e), _) | (_, Err(e)) => {
            warn!(%remote, %installed, error = %e, "cannot compare versions");
            return false;
        }
    };

    remote_version > installed_version
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full() {
        assert_eq!(parse_version("2.4.0").unwrap(), Version::new(2, 4, 0));
    }

    #[test]
    fn test_parse_pads_missing_components() {
        assert_eq!(parse_version("2").unwrap(), Version::new(2, 0, 0));
        assert_eq!(parse_version("2.4").unwrap(), Version::new(2, 4, 0));
    }

    #[test]
    fn test_parse_strips_prefix_and_whitespace() {
        assert_eq!(parse_version(" v1.2.3 ").unwrap(), Version::new(1, 2, 3));
        assert_eq!(parse_version("V1.2").unwrap(), Version::new(1, 2, 0));
    }

    #[test]
    fn test_parse_keeps_prerelease() {
        let version = parse_version("2.4-beta.1").unwrap();
        assert_eq!(version, Version::parse("2.4.0-beta.1").unwrap());
    }

    #[test]
    fn test_parse_strips_leading_zeros() {
        assert_eq!(parse_version("2.04").unwrap(), Version::new(2, 4, 0));
        assert_eq!(parse_version("01.00.10").unwrap(), Version::new(1, 0, 10));
    }

    #[test]
    fn test_parse_folds_extra_components_into_build() {
        let version = parse_version("1.2.3.4").unwrap();
        assert_eq!(version, Version::parse("1.2.3+4").unwrap());

        let version = parse_version("1.2.3.4-rc.1+abc").unwrap();
        assert_eq!(version, Version::parse("1.2.3-rc.1+4.abc").unwrap());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            parse_version("not-a-version"),
            Err(UpdaterError::InvalidVersion { .. })
        ));
        assert!(parse_version("").is_err());
        assert!(parse_version("v").is_err());
        assert!(parse_version("1..2").is_err());
    }

    #[test]
    fn test_is_newer_precedence() {
        let cases = [
            ("2.4.0", "2.3.0", true),
            ("2.3.0", "2.3.0", false),
            ("2.2.9", "2.3.0", false),
            ("2.10.0", "2.9.0", true),
            ("3.0.0", "2.99.99", true),
            ("2.4.0", "2.4.0-rc.1", true),
            ("2.4.0-rc.1", "2.4.0", false),
            ("2.4.0-rc.2", "2.4.0-rc.1", true),
            ("2.4", "2.4.0", false),
            ("2.04", "2.4.0", false),
            ("2.10", "2.09", true),
            ("1.2.3.5", "1.2.3.4", true),
            ("1.2.3.4", "1.2.3.5", false),
            ("1.2.3.10", "1.2.3.9", true),
            ("1.2.3.1", "1.2.3", true),
            ("1.2.4", "1.2.3.9", true),
        ];

        for (remote, installed, expected) in cases {
            assert_eq!(
                is_newer(remote, installed),
                expected,
                "is_newer({remote}, {installed})"
            );
        }
    }

    #[test]
    fn test_is_newer_is_antisymmetric() {
        let versions = ["1.0.0", "1.0.1", "1.1.0", "2.0.0-alpha", "2.0.0"];
        for a in versions {
            for b in versions {
                assert!(!(is_newer(a, b) && is_newer(b, a)), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_is_newer_unparseable_is_false() {
        assert!(!is_newer("garbage", "1.0.0"));
        assert!(!is_newer("2.0.0", "garbage"));
    }
}
