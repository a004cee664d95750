//! Card: one row of the launcher page.

use crate::status::{Availability, CardStatus};
use crate::target::Target;

/// A target as displayed: text, icon, status badge and optional link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub key: String,
    pub title: String,
    pub subtitle: String,
    pub icon: String,
    /// Outbound link; `None` when the card is disabled.
    pub href: Option<String>,
    pub status: CardStatus,
}

impl Card {
    #[must_use]
    pub fn new(target: &Target, availability: Availability) -> Self {
        let status = CardStatus::from(availability);
        Self {
            key: target.key.clone(),
            title: target.title.clone(),
            subtitle: target.subtitle.clone(),
            icon: target.icon.clone(),
            href: status.enabled().then(|| target.url.clone()),
            status,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.status.enabled()
    }
}
