//! Probe adapter error types.

/// Errors raised while setting up the probe. Probing itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// The reqwest client could not be built (TLS backend, invalid header, …).
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("probe timeout must be a positive number of seconds, got {0}")]
    InvalidTimeout(f64),

    #[error("probe user agent must not be empty")]
    EmptyUserAgent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_invalid_timeout_error() {
        let err = ProbeError::InvalidTimeout(-1.5);
        assert_eq!(
            err.to_string(),
            "probe timeout must be a positive number of seconds, got -1.5"
        );
    }

    #[test]
    fn should_display_empty_user_agent_error() {
        assert_eq!(
            ProbeError::EmptyUserAgent.to_string(),
            "probe user agent must not be empty"
        );
    }
}
