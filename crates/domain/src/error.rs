//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`LaunchpadError`] via `#[from]`.

/// Base error for domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum LaunchpadError {
    #[error("validation error")]
    Validation(#[from] ValidationError),
}

/// A domain invariant was violated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("username must not be empty")]
    EmptyUsername,

    #[error("username {0:?} must not contain ':'")]
    UsernameContainsColon(String),

    #[error("password for {0:?} must not be empty")]
    EmptyPassword(String),

    #[error("credential table must contain at least one user")]
    NoCredentials,

    #[error("credential entry #{position} is malformed, expected `user:password`")]
    MalformedCredential { position: usize },

    #[error("target key must not be empty")]
    EmptyKey,

    #[error("duplicate target key {0:?}")]
    DuplicateKey(String),

    #[error("target {0:?} has an empty title")]
    EmptyTitle(String),

    #[error("target {key:?} has url {url:?}, expected an absolute http(s) url")]
    InvalidUrl { key: String, url: String },

    #[error("at most one target may be probed, found {0}")]
    MultipleProbedTargets(usize),
}
