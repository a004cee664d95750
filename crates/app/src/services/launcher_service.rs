//! Launcher service: decides availability per target and assembles the page.

use std::time::{Duration, Instant};

use launchpad_domain::card::Card;
use launchpad_domain::page::Page;
use launchpad_domain::status::Availability;
use launchpad_domain::target::{Target, TargetRegistry};
use launchpad_domain::theme::Theme;

use crate::ports::ReachabilityProbe;

/// Probe timeout used when the deployment does not configure one.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Application service that turns the target registry into a [`Page`].
pub struct LauncherService<P> {
    probe: P,
    registry: TargetRegistry,
    timeout: Duration,
}

impl<P: ReachabilityProbe> LauncherService<P> {
    /// Create a new service probing gated targets through `probe`, each probe
    /// bounded by `timeout`.
    pub fn new(probe: P, registry: TargetRegistry, timeout: Duration) -> Self {
        Self {
            probe,
            registry,
            timeout,
        }
    }

    /// Decide the availability of a single target.
    ///
    /// Targets without `probe` are always available and never touch the
    /// network. The gated target is probed once per call.
    pub async fn availability_of(&self, target: &Target) -> Availability {
        if !target.probe {
            return Availability::Available;
        }

        let started = Instant::now();
        let availability = Availability::from(self.probe.probe(&target.url, self.timeout).await);
        tracing::info!(
            target_key = %target.key,
            url = %target.url,
            %availability,
            elapsed = ?started.elapsed(),
            "probed gated target"
        );
        availability
    }

    /// Build the launcher page: one card per target, in registry order.
    ///
    /// Awaits the gated target's probe, so the call takes up to the probe
    /// timeout when such a target exists.
    #[tracing::instrument(skip_all, fields(targets = self.registry.len()))]
    pub async fn build_page(&self, theme: Theme) -> Page {
        let mut cards = Vec::with_capacity(self.registry.len());
        for target in &self.registry {
            cards.push(Card::new(target, self.availability_of(target).await));
        }
        Page::new(theme, cards)
    }
}
