//! Probe configuration.

use std::time::Duration;

use launchpad_app::services::launcher_service::DEFAULT_PROBE_TIMEOUT;
use serde::Deserialize;

use crate::error::ProbeError;

/// `User-Agent` sent with every probe request unless configured otherwise.
pub const DEFAULT_USER_AGENT: &str = "SciTechDirectory/1.0";

/// Configuration for the HTTP reachability probe.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Upper bound on a single probe, in seconds. Fractions are allowed.
    pub timeout_secs: f64,
    /// `User-Agent` header identifying the portal to the target.
    pub user_agent: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_PROBE_TIMEOUT.as_secs_f64(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ProbeConfig {
    /// The probe timeout as a [`Duration`].
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::InvalidTimeout`] when `timeout_secs` is zero,
    /// negative, not finite, or too large to represent.
    pub fn timeout(&self) -> Result<Duration, ProbeError> {
        match Duration::try_from_secs_f64(self.timeout_secs) {
            Ok(timeout) if !timeout.is_zero() => Ok(timeout),
            _ => Err(ProbeError::InvalidTimeout(self.timeout_secs)),
        }
    }

    /// Check the configuration without building a client.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::InvalidTimeout`] or [`ProbeError::EmptyUserAgent`].
    pub fn validate(&self) -> Result<(), ProbeError> {
        self.timeout()?;
        if self.user_agent.trim().is_empty() {
            return Err(ProbeError::EmptyUserAgent);
        }
        Ok(())
    }
}
