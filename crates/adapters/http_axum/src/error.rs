//! HTTP adapter error types.

/// Errors raised while preparing the HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// The launcher template failed to render.
    #[error("failed to render launcher page")]
    Render(#[from] askama::Error),

    /// The realm cannot be sent in a `WWW-Authenticate` header.
    #[error("invalid auth realm {0:?}: must be printable ASCII without '\"'")]
    InvalidRealm(String),
}
