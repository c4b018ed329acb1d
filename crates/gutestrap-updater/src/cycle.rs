//! Per-cycle fetch memo.

use gutestrap_host::PluginHeaders;

/// Fetch state within one host update-check cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CycleState {
    /// No remote data has been obtained yet.
    #[default]
    NotFetched,
    /// Remote headers were obtained; later lookups reuse them.
    Fetched(PluginHeaders),
}

/// Context for one host update-check cycle.
///
/// The host creates one per cycle and passes it to every entry point that
/// fires during that cycle, so the remote document is read at most once.
/// Only a successful fetch with data moves the cycle to
/// [`CycleState::Fetched`]; an empty result leaves it retryable.
#[derive(Debug, Default)]
pub struct UpdateCycle {
    state: CycleState,
}

impl UpdateCycle {
    /// Starts a new cycle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> &CycleState {
        &self.state
    }

    /// Returns true once remote data has been obtained in this cycle.
    #[must_use]
    pub fn is_fetched(&self) -> bool {
        matches!(self.state, CycleState::Fetched(_))
    }

    /// Returns the cached headers, if any.
    #[must_use]
    pub fn headers(&self) -> Option<&PluginHeaders> {
        match &self.state {
            CycleState::Fetched(headers) => Some(headers),
            CycleState::NotFetched => None,
        }
    }

    /// Records fetched headers.
    pub(crate) fn record(&mut self, headers: PluginHeaders) {
        self.state = CycleState::Fetched(headers);
    }

    /// Forgets cached data so the next lookup hits the network again.
    pub fn reset(&mut self) {
        self.state = CycleState::NotFetched;
    }
}
