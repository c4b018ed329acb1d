//! Check command.

use anyhow::{Context, Result, anyhow};
use chrono::Utc;
use clap::Args;
use tracing::info;

use gutestrap_host::{UpdateCheckResult, UpdateOutcome};
use gutestrap_runtime::Site;
use gutestrap_updater::{UpdateCycle, UpdateResolver};

/// Arguments for the check command.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Installed version (defaults to the version in the site registry)
    #[arg(short, long)]
    pub installed: Option<String>,
}

/// Runs the check command.
pub fn run(args: &CheckArgs, site: &Site) -> Result<()> {
    let resolver = super::resolver(site)?;
    let basename = resolver.identity().basename();

    let installed = match &args.installed {
        Some(version) => version.clone(),
        None => site
            .registry()
            .context("failed to load site registry")?
            .get(&basename)
            .and_then(|p| p.version.clone())
            .ok_or_else(|| {
                anyhow!("no installed version of {basename} is known, pass --installed")
            })?,
    };

    let store = site.store();
    let aggregate = store.load().context("failed to load stored update check")?;

    info!(installed = %installed, url = %resolver.metadata_url(), "checking for updates");

    let mut cycle = UpdateCycle::new();
    let aggregate = check_cycle(&resolver, &mut cycle, aggregate, &installed);

    store
        .save(&aggregate)
        .context("failed to store update check")?;

    match aggregate.outcome(&basename) {
        Some(UpdateOutcome::UpdateAvailable(descriptor)) => {
            println!(
                "Update available: {} -> {}",
                installed,
                descriptor.version.as_deref().unwrap_or("unknown")
            );
            println!("Package: {}", descriptor.package);
        }
        Some(UpdateOutcome::NoUpdate(_)) | None if cycle.is_fetched() => {
            println!("{basename} is up to date ({installed})");
        }
        Some(UpdateOutcome::NoUpdate(_)) | None => {
            println!("Could not read remote plugin metadata; {basename} stays at {installed}");
        }
    }

    Ok(())
}

/// Runs one update-check pass the way the host does: start a fresh pass,
/// record the installed copy as current, then let the resolver replace that
/// entry if the remote is newer.
fn check_cycle(
    resolver: &UpdateResolver,
    cycle: &mut UpdateCycle,
    mut aggregate: UpdateCheckResult,
    installed: &str,
) -> UpdateCheckResult {
    let basename = resolver.identity().basename();

    aggregate.begin(Utc::now());
    aggregate.record_checked(&basename, installed);
    aggregate.mark_no_update(&basename, resolver.installed_descriptor(installed));

    resolver.resolve_update_check_result(cycle, aggregate, installed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gutestrap_host::{
        FileMover, HeaderField, HostError, HostResult, MetadataSource, PluginHeaders,
    };
    use gutestrap_runtime::UpdateCheckStore;
    use std::path::Path;
    use tempfile::TempDir;

    const BASENAME: &str = "gutestrap/gutestrap.php";

    struct FixedSource(Option<&'static str>);

    impl MetadataSource for FixedSource {
        fn fetch(&self, url: &str) -> HostResult<PluginHeaders> {
            match self.0 {
                Some(version) => Ok(PluginHeaders::new().with(HeaderField::Version, version)),
                None => Err(HostError::Fetch {
                    url: url.to_string(),
                    reason: "offline".to_string(),
                }),
            }
        }
    }

    struct NoMove;

    impl FileMover for NoMove {
        fn move_dir(&self, _from: &Path, _to: &Path) -> HostResult<()> {
            Ok(())
        }
    }

    fn resolver(remote_version: Option<&'static str>) -> UpdateResolver {
        UpdateResolver::new(
            "/srv/site/plugins",
            Box::new(FixedSource(remote_version)),
            Box::new(NoMove),
        )
    }

    fn checked_and_stored(remote_version: Option<&'static str>) -> UpdateCheckResult {
        let temp = TempDir::new().unwrap();
        let store = UpdateCheckStore::new(temp.path().join("update-check.json"));

        let aggregate = check_cycle(
            &resolver(remote_version),
            &mut UpdateCycle::new(),
            store.load().unwrap(),
            "2.3.0",
        );
        store.save(&aggregate).unwrap();
        store.load().unwrap()
    }

    #[test]
    fn test_current_plugin_is_stored_as_no_update() {
        let stored = checked_and_stored(Some("2.3.0"));

        assert_eq!(stored.checked.get(BASENAME).map(String::as_str), Some("2.3.0"));
        match stored.outcome(BASENAME) {
            Some(UpdateOutcome::NoUpdate(descriptor)) => {
                assert_eq!(descriptor.version.as_deref(), Some("2.3.0"));
            }
            other => panic!("expected no update, got {other:?}"),
        }
    }

    #[test]
    fn test_newer_remote_replaces_no_update_entry() {
        let stored = checked_and_stored(Some("2.4.0"));

        match stored.outcome(BASENAME) {
            Some(UpdateOutcome::UpdateAvailable(descriptor)) => {
                assert_eq!(descriptor.version.as_deref(), Some("2.4.0"));
            }
            other => panic!("expected an update, got {other:?}"),
        }
        assert!(!stored.no_update.contains_key(BASENAME));
    }

    #[test]
    fn test_unreachable_remote_keeps_no_update_entry() {
        let stored = checked_and_stored(None);
        assert!(matches!(
            stored.outcome(BASENAME),
            Some(UpdateOutcome::NoUpdate(_))
        ));
    }

    #[test]
    fn test_new_pass_discards_stale_update() {
        let mut cycle = UpdateCycle::new();
        let first = check_cycle(
            &resolver(Some("2.4.0")),
            &mut cycle,
            UpdateCheckResult::default(),
            "2.3.0",
        );
        assert!(first.update_for(BASENAME).is_some());

        let second = check_cycle(
            &resolver(Some("2.4.0")),
            &mut UpdateCycle::new(),
            first,
            "2.4.0",
        );
        assert!(second.update_for(BASENAME).is_none());
        assert!(matches!(
            second.outcome(BASENAME),
            Some(UpdateOutcome::NoUpdate(_))
        ));
    }
}
