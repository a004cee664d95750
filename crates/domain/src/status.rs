//! Availability and the status shown on a card.
//!
//! A probed target is either reachable or not; the card derives its badge
//! label, badge category and interactivity from that single bit. Targets that
//! are not probed are always [`Availability::Available`].

use std::fmt;

/// Outcome of the reachability decision for one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Availability {
    Available,
    Unavailable,
}

impl Availability {
    #[must_use]
    pub fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }
}

impl From<bool> for Availability {
    fn from(reachable: bool) -> Self {
        if reachable {
            Self::Available
        } else {
            Self::Unavailable
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => f.write_str("available"),
            Self::Unavailable => f.write_str("unavailable"),
        }
    }
}

/// Display status of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardStatus {
    /// Live: clickable, opens the target.
    Prod,
    /// Not reachable at startup: shown greyed out, no link.
    ComingSoon,
}

impl CardStatus {
    /// Badge text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Prod => "PROD",
            Self::ComingSoon => "COMING SOON",
        }
    }

    /// Badge category, used as the CSS modifier class.
    #[must_use]
    pub fn category(self) -> &'static str {
        match self {
            Self::Prod => "prod",
            Self::ComingSoon => "soon",
        }
    }

    /// Whether the card is clickable.
    #[must_use]
    pub fn enabled(self) -> bool {
        matches!(self, Self::Prod)
    }

    /// Bootstrap-Icons class shown inside the badge.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Prod => "bi-lock-fill",
            Self::ComingSoon => "bi-hourglass-split",
        }
    }
}

impl From<Availability> for CardStatus {
    fn from(availability: Availability) -> Self {
        match availability {
            Availability::Available => Self::Prod,
            Availability::Unavailable => Self::ComingSoon,
        }
    }
}

/// Derive the card status from the probe result.
#[must_use]
pub fn status(reachable: bool) -> CardStatus {
    Availability::from(reachable).into()
}

/// Classify an HTTP response status for the reachability probe.
///
/// Anything in `[200, 500)` means DNS resolved and a server answered, so
/// redirects and client errors such as `404` count as reachable. Only `5xx`
/// (and anything below `200`) do not.
#[must_use]
pub fn is_reachable_status(code: u16) -> bool {
    (200..500).contains(&code)
}
