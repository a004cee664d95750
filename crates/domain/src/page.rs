//! Page: the fully resolved launcher document, built once at startup.

use crate::card::Card;
use crate::theme::Theme;

/// Everything needed to render the launcher: branding plus one card per target.
#[derive(Debug, Clone)]
pub struct Page {
    pub theme: Theme,
    pub cards: Vec<Card>,
}

impl Page {
    #[must_use]
    pub fn new(theme: Theme, cards: Vec<Card>) -> Self {
        Self { theme, cards }
    }

    #[must_use]
    pub fn card(&self, key: &str) -> Option<&Card> {
        self.cards.iter().find(|card| card.key == key)
    }

    #[must_use]
    pub fn enabled_count(&self) -> usize {
        self.cards.iter().filter(|card| card.enabled()).count()
    }
}
