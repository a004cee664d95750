//! HTTP Basic-Auth middleware.
//!
//! Every protected route runs [`require_basic_auth`] first. Requests without
//! a valid `Authorization: Basic …` header never reach the handler and get a
//! `401` challenge instead.

use axum::extract::{Request, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::state::AppState;

/// Username and password sent by the client.
#[derive(PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Extract Basic-Auth credentials from the request headers.
///
/// Returns `None` when the header is missing, uses another scheme, is not
/// valid base64 / UTF-8, or lacks the `:` separator.
#[must_use]
pub fn basic_credentials(headers: &HeaderMap) -> Option<BasicCredentials> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, encoded) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let decoded = String::from_utf8(STANDARD.decode(encoded.trim()).ok()?).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some(BasicCredentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}

/// Middleware rejecting requests whose credentials are not in the table.
pub async fn require_basic_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    match basic_credentials(request.headers()) {
        Some(creds) if state.credentials().verify(&creds.username, &creds.password) => {
            next.run(request).await
        }
        Some(creds) => {
            tracing::debug!(
                username = %creds.username,
                path = %request.uri().path(),
                "rejected basic auth credentials"
            );
            challenge(state.realm())
        }
        None => {
            tracing::debug!(
                path = %request.uri().path(),
                "missing or malformed authorization header"
            );
            challenge(state.realm())
        }
    }
}

fn challenge(realm: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(
            header::WWW_AUTHENTICATE,
            format!("Basic realm=\"{realm}\", charset=\"UTF-8\""),
        )],
        "Unauthorized",
    )
        .into_response()
}
