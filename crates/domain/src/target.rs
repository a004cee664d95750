//! Targets, the external applications the portal links to, and the
//! ordered registry that holds them.

use std::collections::HashSet;

use serde::Deserialize;
use url::Url;

use crate::error::{LaunchpadError, ValidationError};

/// Icon used when a target does not name one.
pub const DEFAULT_ICON: &str = "bi-box-arrow-up-right";

/// One external application shown as a card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Target {
    /// Logical service name, unique within a registry (e.g. `atlas`).
    pub key: String,
    /// Card title.
    pub title: String,
    /// One-line description under the title.
    #[serde(default)]
    pub subtitle: String,
    /// Bootstrap-Icons class (e.g. `bi-globe2`).
    #[serde(default = "default_icon")]
    pub icon: String,
    /// Absolute `http(s)` URL the card opens.
    pub url: String,
    /// Gate the card on a startup reachability probe.
    #[serde(default)]
    pub probe: bool,
}

fn default_icon() -> String {
    DEFAULT_ICON.to_string()
}

impl Target {
    /// Create a builder for constructing a [`Target`].
    #[must_use]
    pub fn builder() -> TargetBuilder {
        TargetBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchpadError::Validation`] when `key` or `title` is empty,
    /// or `url` is not an absolute `http`/`https` URL.
    pub fn validate(&self) -> Result<(), LaunchpadError> {
        if self.key.is_empty() {
            return Err(ValidationError::EmptyKey.into());
        }
        if self.title.is_empty() {
            return Err(ValidationError::EmptyTitle(self.key.clone()).into());
        }
        if !is_absolute_http_url(&self.url) {
            return Err(ValidationError::InvalidUrl {
                key: self.key.clone(),
                url: self.url.clone(),
            }
            .into());
        }
        Ok(())
    }
}

/// Whether `url` parses as an absolute `http`/`https` URL with a non-empty
/// host. The string is rendered verbatim as a link, so whitespace anywhere is
/// rejected too.
#[must_use]
pub fn is_absolute_http_url(url: &str) -> bool {
    if url.chars().any(char::is_whitespace) {
        return false;
    }
    Url::parse(url).is_ok_and(|parsed| {
        matches!(parsed.scheme(), "http" | "https")
            && parsed.host_str().is_some_and(|host| !host.is_empty())
    })
}

/// Step-by-step builder for [`Target`].
#[derive(Debug, Default)]
pub struct TargetBuilder {
    key: Option<String>,
    title: Option<String>,
    subtitle: Option<String>,
    icon: Option<String>,
    url: Option<String>,
    probe: bool,
}

impl TargetBuilder {
    #[must_use]
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    #[must_use]
    pub fn probe(mut self, probe: bool) -> Self {
        self.probe = probe;
        self
    }

    /// Consume the builder, validate, and return a [`Target`].
    ///
    /// # Errors
    ///
    /// Returns [`LaunchpadError::Validation`] if a required field is missing
    /// or invalid.
    pub fn build(self) -> Result<Target, LaunchpadError> {
        let target = Target {
            key: self.key.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            subtitle: self.subtitle.unwrap_or_default(),
            icon: self.icon.unwrap_or_else(default_icon),
            url: self.url.unwrap_or_default(),
            probe: self.probe,
        };
        target.validate()?;
        Ok(target)
    }
}

/// Ordered set of targets. Render order is registry order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetRegistry {
    targets: Vec<Target>,
}

impl TargetRegistry {
    /// Build a registry and check its invariants.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchpadError::Validation`] if any target is invalid, two
    /// targets share a key, or more than one target is probed.
    pub fn new(targets: Vec<Target>) -> Result<Self, LaunchpadError> {
        let mut seen = HashSet::new();
        for target in &targets {
            target.validate()?;
            if !seen.insert(target.key.as_str()) {
                return Err(ValidationError::DuplicateKey(target.key.clone()).into());
            }
        }

        let probed = targets.iter().filter(|target| target.probe).count();
        if probed > 1 {
            return Err(ValidationError::MultipleProbedTargets(probed).into());
        }

        Ok(Self { targets })
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Target> {
        self.targets.iter().find(|target| target.key == key)
    }

    /// The target gated on the reachability probe, if any.
    #[must_use]
    pub fn gated(&self) -> Option<&Target> {
        self.targets.iter().find(|target| target.probe)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Target> {
        self.targets.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl<'a> IntoIterator for &'a TargetRegistry {
    type Item = &'a Target;
    type IntoIter = std::slice::Iter<'a, Target>;

    fn into_iter(self) -> Self::IntoIter {
        self.targets.iter()
    }
}
