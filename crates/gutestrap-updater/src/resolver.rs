//! Update resolution.

use std::path::{Path, PathBuf};

use gutestrap_config::{PluginIdentity, RemoteSource};
use gutestrap_host::{
    FileMover, HeaderField, InstallOutcome, MetadataSource, PluginActivation,
    RemotePluginDescriptor, UpdateCheckResult,
};
use tracing::{debug, error, info, warn};

use crate::descriptor::{decorate_sections, for_installed, from_headers};
use crate::{UpdateCycle, is_newer};

/// Action tag of the host's plugin-information request.
pub const PLUGIN_INFORMATION_ACTION: &str = "plugin_information";

/// Answers the host's update questions for one plugin.
///
/// Each operation corresponds to a host extension point. Within one
/// update-check cycle the host must call
/// [`resolve_hostname_update`](Self::resolve_hostname_update), when it uses
/// it, before [`resolve_update_check_result`](Self::resolve_update_check_result):
/// the latter skips its work once the cycle has fetched.
pub struct UpdateResolver {
    identity: PluginIdentity,
    remote: RemoteSource,
    plugins_dir: PathBuf,
    source: Box<dyn MetadataSource>,
    mover: Box<dyn FileMover>,
}

impl UpdateResolver {
    /// Creates a resolver for the built-in plugin identity and remote source.
    #[must_use]
    pub fn new(
        plugins_dir: impl Into<PathBuf>,
        source: Box<dyn MetadataSource>,
        mover: Box<dyn FileMover>,
    ) -> Self {
        Self {
            identity: PluginIdentity::builtin(),
            remote: RemoteSource::builtin(),
            plugins_dir: plugins_dir.into(),
            source,
            mover,
        }
    }

    /// Overrides the plugin identity.
    #[must_use]
    pub fn with_identity(mut self, identity: PluginIdentity) -> Self {
        self.identity = identity;
        self
    }

    /// Overrides the remote source.
    #[must_use]
    pub fn with_remote(mut self, remote: RemoteSource) -> Self {
        self.remote = remote;
        self
    }

    /// Returns the plugin identity.
    #[must_use]
    pub fn identity(&self) -> &PluginIdentity {
        &self.identity
    }

    /// Returns the remote source.
    #[must_use]
    pub fn remote(&self) -> &RemoteSource {
        &self.remote
    }

    /// URL of the remote metadata document.
    #[must_use]
    pub fn metadata_url(&self) -> String {
        self.remote.file_url(self.identity.entry_file())
    }

    /// Canonical installation directory of the plugin.
    #[must_use]
    pub fn install_dir(&self) -> PathBuf {
        self.plugins_dir.join(self.identity.slug())
    }

    /// Descriptor of the installed copy, as a host records it under
    /// "no update" before asking for remote data.
    #[must_use]
    pub fn installed_descriptor(&self, installed_version: &str) -> RemotePluginDescriptor {
        for_installed(&self.identity, &self.remote, installed_version)
    }

    /// Returns the remote descriptor, reading the remote document at most
    /// once per cycle.
    ///
    /// Retrieval failures and documents without plugin headers yield `None`.
    pub fn fetch_remote_descriptor(
        &self,
        cycle: &mut UpdateCycle,
    ) -> Option<RemotePluginDescriptor> {
        if let Some(headers) = cycle.headers() {
            debug!("reusing remote metadata fetched earlier in this cycle");
            return Some(from_headers(&self.identity, &self.remote, headers));
        }

        let url = self.metadata_url();
        debug!(%url, "fetching remote plugin metadata");

        let headers = match self.source.fetch(&url) {
            Ok(headers) if headers.is_empty() => {
                warn!(%url, "remote document has no plugin headers");
                return None;
            }
            Ok(headers) => headers,
            Err(e) => {
                warn!(%url, error = %e, "failed to fetch remote plugin metadata");
                return None;
            }
        };

        let descriptor = from_headers(&self.identity, &self.remote, &headers);
        cycle.record(headers);

        debug!(version = ?descriptor.version, "fetched remote plugin metadata");
        Some(descriptor)
    }

    /// Classifies this plugin in the host's update-check aggregate.
    ///
    /// The aggregate is returned untouched when it has no response container
    /// or when the cycle already fetched (an earlier entry point handled it).
    pub fn resolve_update_check_result(
        &self,
        cycle: &mut UpdateCycle,
        mut aggregate: UpdateCheckResult,
        installed_version: &str,
    ) -> UpdateCheckResult {
        if !aggregate.has_response() {
            debug!("update check has no response container, skipping");
            return aggregate;
        }

        if cycle.is_fetched() {
            debug!("remote metadata already handled this cycle, skipping");
            return aggregate;
        }

        let Some(descriptor) = self.fetch_remote_descriptor(cycle) else {
            return aggregate;
        };

        if self.is_update(&descriptor, installed_version) {
            info!(
                installed = %installed_version,
                available = ?descriptor.version,
                "update available"
            );
            aggregate.mark_update_available(self.identity.basename(), descriptor);
        }

        aggregate
    }

    /// Answers the host's per-hostname update query for `plugin_file`.
    ///
    /// Returns the remote descriptor when it names a newer version of this
    /// plugin, `None` otherwise.
    pub fn resolve_hostname_update(
        &self,
        cycle: &mut UpdateCycle,
        plugin_file: &str,
        installed_version: &str,
    ) -> Option<RemotePluginDescriptor> {
        if !self.identity.matches(plugin_file) {
            return None;
        }

        let descriptor = self.fetch_remote_descriptor(cycle)?;

        if self.is_update(&descriptor, installed_version) {
            info!(
                installed = %installed_version,
                available = ?descriptor.version,
                "update available"
            );
            Some(descriptor)
        } else {
            None
        }
    }

    /// Answers the host's plugin-information request.
    ///
    /// Requests for other plugins or other actions get `current` back
    /// unchanged.
    pub fn resolve_details_view(
        &self,
        cycle: &mut UpdateCycle,
        current: Option<RemotePluginDescriptor>,
        action: &str,
        slug: &str,
    ) -> Option<RemotePluginDescriptor> {
        if action != PLUGIN_INFORMATION_ACTION || slug != self.identity.slug() {
            return current;
        }

        let mut descriptor = self.fetch_remote_descriptor(cycle)?;
        let description = cycle
            .headers()
            .and_then(|h| h.get(HeaderField::Description))
            .map(str::to_string);

        decorate_sections(&mut descriptor, &self.remote, description.as_deref());
        Some(descriptor)
    }

    /// Moves a freshly extracted package to the canonical install directory.
    ///
    /// Installs of other items pass through. The returned flag is always
    /// `install_succeeded`; move and activation failures are only logged.
    pub fn post_install(
        &self,
        activation: &mut dyn PluginActivation,
        install_succeeded: bool,
        outcome: &mut InstallOutcome,
    ) -> bool {
        if !self.identity.matches(&outcome.plugin) {
            return install_succeeded;
        }

        let basename = self.identity.basename();
        let was_active = activation.is_active(&basename);
        let install_dir = self.install_dir();

        self.relocate(&outcome.destination, &install_dir);
        outcome.destination.clone_from(&install_dir);

        if was_active {
            match activation.activate(&basename, &install_dir) {
                Ok(()) => info!(plugin = %basename, "reactivated plugin"),
                Err(e) => error!(plugin = %basename, error = %e, "failed to reactivate plugin"),
            }
        }

        install_succeeded
    }

    fn relocate(&self, from: &Path, to: &Path) {
        if from == to {
            return;
        }

        match self.mover.move_dir(from, to) {
            Ok(()) => info!(from = %from.display(), to = %to.display(), "relocated plugin"),
            Err(e) => error!(
                from = %from.display(),
                to = %to.display(),
                error = %e,
                "failed to relocate plugin"
            ),
        }
    }

    fn is_update(&self, descriptor: &RemotePluginDescriptor, installed_version: &str) -> bool {
        match descriptor.version.as_deref() {
            Some(remote_version) => is_newer(remote_version, installed_version),
            None => {
                warn!(plugin = %self.identity.slug(), "remote metadata has no version");
                false
            }
        }
    }
}
