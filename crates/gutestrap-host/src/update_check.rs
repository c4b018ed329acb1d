//! Host update-check aggregate.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::RemotePluginDescriptor;

/// Classification of one plugin in an update check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome<'a> {
    /// A newer version is available.
    UpdateAvailable(&'a RemotePluginDescriptor),
    /// The installed version is current.
    NoUpdate(&'a RemotePluginDescriptor),
}

/// Result of one host update-check pass.
///
/// An identifier is in at most one of `response` and `no_update`; use
/// [`mark_update_available`](Self::mark_update_available) and
/// [`mark_no_update`](Self::mark_no_update) to keep it that way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCheckResult {
    /// When the host last ran the check.
    #[serde(default)]
    pub last_checked: Option<DateTime<Utc>>,

    /// Installed version per plugin identifier.
    #[serde(default)]
    pub checked: BTreeMap<String, String>,

    /// Plugins with an update available. `None` until the host starts a check.
    #[serde(default)]
    pub response: Option<BTreeMap<String, RemotePluginDescriptor>>,

    /// Plugins known to be current.
    #[serde(default)]
    pub no_update: BTreeMap<String, RemotePluginDescriptor>,
}

impl UpdateCheckResult {
    /// Creates an aggregate ready to receive results.
    #[must_use]
    pub fn started(now: DateTime<Utc>) -> Self {
        Self {
            last_checked: Some(now),
            response: Some(BTreeMap::new()),
            ..Self::default()
        }
    }

    /// Starts a new check pass, discarding the previous pass's results.
    pub fn begin(&mut self, now: DateTime<Utc>) {
        *self = Self::started(now);
    }

    /// Returns true if the host has opened the response container.
    #[must_use]
    pub fn has_response(&self) -> bool {
        self.response.is_some()
    }

    /// Records the installed version of a plugin.
    pub fn record_checked(&mut self, identifier: impl Into<String>, version: impl Into<String>) {
        self.checked.insert(identifier.into(), version.into());
    }

    /// Marks an update as available, dropping any stale "no update" entry.
    ///
    /// Does nothing when the response container is absent.
    pub fn mark_update_available(
        &mut self,
        identifier: impl Into<String>,
        descriptor: RemotePluginDescriptor,
    ) {
        let identifier = identifier.into();
        if let Some(response) = self.response.as_mut() {
            self.no_update.remove(&identifier);
            response.insert(identifier, descriptor);
        }
    }

    /// Marks a plugin as current, dropping any "update available" entry.
    pub fn mark_no_update(
        &mut self,
        identifier: impl Into<String>,
        descriptor: RemotePluginDescriptor,
    ) {
        let identifier = identifier.into();
        if let Some(response) = self.response.as_mut() {
            response.remove(&identifier);
        }
        self.no_update.insert(identifier, descriptor);
    }

    /// Returns the recorded outcome for a plugin.
    #[must_use]
    pub fn outcome(&self, identifier: &str) -> Option<UpdateOutcome<'_>> {
        if let Some(descriptor) = self.response.as_ref().and_then(|r| r.get(identifier)) {
            return Some(UpdateOutcome::UpdateAvailable(descriptor));
        }
        self.no_update.get(identifier).map(UpdateOutcome::NoUpdate)
    }

    /// Returns the pending update for a plugin, if any.
    #[must_use]
    pub fn update_for(&self, identifier: &str) -> Option<&RemotePluginDescriptor> {
        self.response.as_ref()?.get(identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "gutestrap/gutestrap.php";

    fn descriptor(version: &str) -> RemotePluginDescriptor {
        RemotePluginDescriptor {
            slug: "gutestrap".to_string(),
            plugin: ID.to_string(),
            version: Some(version.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_has_no_response() {
        let result = UpdateCheckResult::default();
        assert!(!result.has_response());
        assert!(result.outcome(ID).is_none());
    }

    #[test]
    fn test_started_opens_response() {
        let result = UpdateCheckResult::started(Utc::now());
        assert!(result.has_response());
        assert!(result.last_checked.is_some());
    }

    #[test]
    fn test_begin_discards_previous_pass() {
        let mut result = UpdateCheckResult::started(Utc::now());
        result.record_checked(ID, "2.3.0");
        result.mark_update_available(ID, descriptor("2.4.0"));
        result.begin(Utc::now());

        assert!(result.has_response());
        assert!(result.checked.is_empty());
        assert!(result.outcome(ID).is_none());
    }

    #[test]
    fn test_mark_update_available_removes_no_update() {
        let mut result = UpdateCheckResult::started(Utc::now());
        result.mark_no_update(ID, descriptor("2.3.0"));
        result.mark_update_available(ID, descriptor("2.4.0"));

        assert!(!result.no_update.contains_key(ID));
        match result.outcome(ID) {
            Some(UpdateOutcome::UpdateAvailable(d)) => {
                assert_eq!(d.version.as_deref(), Some("2.4.0"));
            }
            other => panic!("expected update available, got {other:?}"),
        }
    }

    #[test]
    fn test_mark_no_update_removes_update() {
        let mut result = UpdateCheckResult::started(Utc::now());
        result.mark_update_available(ID, descriptor("2.4.0"));
        result.mark_no_update(ID, descriptor("2.3.0"));

        assert!(result.update_for(ID).is_none());
        assert!(matches!(result.outcome(ID), Some(UpdateOutcome::NoUpdate(_))));
    }

    #[test]
    fn test_mark_update_without_response_is_ignored() {
        let mut result = UpdateCheckResult::default();
        result.mark_no_update(ID, descriptor("2.3.0"));
        result.mark_update_available(ID, descriptor("2.4.0"));

        assert!(result.response.is_none());
        assert!(matches!(result.outcome(ID), Some(UpdateOutcome::NoUpdate(_))));
    }

    #[test]
    fn test_record_checked() {
        let mut result = UpdateCheckResult::default();
        result.record_checked(ID, "2.3.0");
        assert_eq!(result.checked.get(ID).map(String::as_str), Some("2.3.0"));
    }

    #[test]
    fn test_json_roundtrip_keeps_missing_response() {
        let json = serde_json::to_string(&UpdateCheckResult::default()).unwrap();
        let parsed: UpdateCheckResult = serde_json::from_str(&json).unwrap();
        assert!(parsed.response.is_none());
    }
}
