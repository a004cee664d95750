//! Probe port: decide whether an external URL is live.

use std::future::Future;
use std::time::Duration;

/// One-shot reachability check against a single URL.
///
/// Implementations never fail: transport errors, timeouts, malformed URLs and
/// server errors all resolve to `false`. The wait is bounded by `timeout`,
/// which is passed per call rather than configured globally.
pub trait ReachabilityProbe {
    /// Return `true` when the URL answered within `timeout` with a status the
    /// implementation classifies as reachable.
    fn probe(&self, url: &str, timeout: Duration) -> impl Future<Output = bool> + Send;
}

impl<T: ReachabilityProbe + Send + Sync> ReachabilityProbe for std::sync::Arc<T> {
    fn probe(&self, url: &str, timeout: Duration) -> impl Future<Output = bool> + Send {
        (**self).probe(url, timeout)
    }
}
