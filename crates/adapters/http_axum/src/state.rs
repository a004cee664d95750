//! Shared application state for axum handlers.

use std::sync::Arc;

use axum::body::Bytes;
use launchpad_domain::credential::CredentialTable;
use launchpad_domain::page::Page;

use crate::dashboard::launcher;
use crate::error::HttpError;

/// Realm announced in the Basic-Auth challenge when none is configured.
pub const DEFAULT_REALM: &str = "launchpad";

/// Application state shared across all axum handlers.
///
/// Cheap to clone: the rendered page is reference-counted bytes and the
/// credential table sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    page_html: Bytes,
    credentials: Arc<CredentialTable>,
    realm: Arc<str>,
}

impl AppState {
    /// Render `page` once and bundle it with the credential table.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRealm`] if `realm` cannot appear in a
    /// quoted header parameter, or [`HttpError::Render`] if the template fails.
    pub fn new(
        page: &Page,
        credentials: CredentialTable,
        realm: impl Into<String>,
    ) -> Result<Self, HttpError> {
        let realm = realm.into();
        if !is_valid_realm(&realm) {
            return Err(HttpError::InvalidRealm(realm));
        }

        let html = launcher::render(page)?;
        tracing::debug!(bytes = html.len(), cards = page.cards.len(), "rendered launcher page");

        Ok(Self {
            page_html: Bytes::from(html),
            credentials: Arc::new(credentials),
            realm: realm.into(),
        })
    }

    /// The pre-rendered launcher document.
    #[must_use]
    pub fn page_html(&self) -> Bytes {
        self.page_html.clone()
    }

    #[must_use]
    pub fn credentials(&self) -> &CredentialTable {
        &self.credentials
    }

    #[must_use]
    pub fn realm(&self) -> &str {
        &self.realm
    }
}

/// Whether `realm` can be placed inside `realm="…"` unescaped.
#[must_use]
pub fn is_valid_realm(realm: &str) -> bool {
    !realm.is_empty() && realm.bytes().all(|b| (b' '..=b'~').contains(&b) && b != b'"')
}
