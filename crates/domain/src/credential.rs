//! Credential table: the fixed set of users allowed to open the portal.
//!
//! The table is supplied at startup (configuration file or environment) and
//! is immutable for the lifetime of the process.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

use crate::error::{LaunchpadError, ValidationError};

/// A single `username` / `password` pair.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Username to password mapping consulted by the Basic-Auth layer.
///
/// Deserializes from a plain `username = "password"` table.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct CredentialTable {
    users: BTreeMap<String, String>,
}

impl CredentialTable {
    /// Build a table from credentials and validate it.
    ///
    /// Later entries with the same username replace earlier ones.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchpadError::Validation`] when the table is empty or an
    /// entry breaks one of the rules checked by [`validate`](Self::validate).
    pub fn new(credentials: impl IntoIterator<Item = Credential>) -> Result<Self, LaunchpadError> {
        let users = credentials
            .into_iter()
            .map(|cred| (cred.username, cred.password))
            .collect();
        let table = Self { users };
        table.validate()?;
        Ok(table)
    }

    /// Parse the inline `user:password,user2:password2` form.
    ///
    /// Each entry is split on its first `:` so passwords may contain colons.
    /// Whitespace around entries is ignored and empty entries are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MalformedCredential`] for an entry without a
    /// `:` and any error from [`new`](Self::new).
    pub fn parse_inline(raw: &str) -> Result<Self, LaunchpadError> {
        let mut credentials = Vec::new();
        for (position, entry) in raw
            .split(',')
            .map(str::trim)
            .enumerate()
            .filter(|(_, entry)| !entry.is_empty())
        {
            let (username, password) = entry
                .split_once(':')
                .ok_or(ValidationError::MalformedCredential { position })?;
            credentials.push(Credential::new(username, password));
        }
        Self::new(credentials)
    }

    /// Check the table invariants.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchpadError::Validation`] when the table is empty, a
    /// username is empty or contains `:`, or a password is empty.
    pub fn validate(&self) -> Result<(), LaunchpadError> {
        if self.users.is_empty() {
            return Err(ValidationError::NoCredentials.into());
        }
        for (username, password) in &self.users {
            if username.is_empty() {
                return Err(ValidationError::EmptyUsername.into());
            }
            if username.contains(':') {
                return Err(ValidationError::UsernameContainsColon(username.clone()).into());
            }
            if password.is_empty() {
                return Err(ValidationError::EmptyPassword(username.clone()).into());
            }
        }
        Ok(())
    }

    /// Return `true` when `username` exists and its password equals `password`.
    #[must_use]
    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.users
            .get(username)
            .is_some_and(|expected| constant_time_eq(expected.as_bytes(), password.as_bytes()))
    }

    /// Whether `username` is a known user.
    #[must_use]
    pub fn contains(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Known usernames, in sorted order.
    pub fn usernames(&self) -> impl Iterator<Item = &str> {
        self.users.keys().map(String::as_str)
    }
}

impl fmt::Debug for CredentialTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialTable")
            .field("usernames", &self.users.keys().collect::<Vec<_>>())
            .finish()
    }
}

// Runtime depends only on the lengths, not on where the first mismatch is.
fn constant_time_eq(left: &[u8], right: &[u8]) -> bool {
    if left.len() != right.len() {
        return false;
    }
    left.iter()
        .zip(right)
        .fold(0u8, |acc, (lhs, rhs)| acc | (lhs ^ rhs))
        == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> CredentialTable {
        CredentialTable::new([
            Credential::new("analyst", "scitech123"),
            Credential::new("demo", "demo2025"),
        ])
        .unwrap()
    }

    #[test]
    fn should_verify_known_user_with_matching_password() {
        assert!(table().verify("analyst", "scitech123"));
    }

    #[test]
    fn should_reject_wrong_password() {
        assert!(!table().verify("analyst", "scitech124"));
        assert!(!table().verify("analyst", "scitech12"));
        assert!(!table().verify("analyst", ""));
    }

    #[test]
    fn should_reject_unknown_user() {
        assert!(!table().verify("mallory", "scitech123"));
    }

    #[test]
    fn should_not_cross_match_passwords_between_users() {
        assert!(!table().verify("demo", "scitech123"));
    }

    #[test]
    fn should_reject_empty_table() {
        let result = CredentialTable::new(Vec::new());
        assert!(matches!(
            result,
            Err(LaunchpadError::Validation(ValidationError::NoCredentials))
        ));
    }

    #[test]
    fn should_reject_username_with_colon() {
        let result = CredentialTable::new([Credential::new("a:b", "secret")]);
        assert!(matches!(
            result,
            Err(LaunchpadError::Validation(
                ValidationError::UsernameContainsColon(_)
            ))
        ));
    }

    #[test]
    fn should_reject_empty_username() {
        let result = CredentialTable::new([Credential::new("", "secret")]);
        assert!(matches!(
            result,
            Err(LaunchpadError::Validation(ValidationError::EmptyUsername))
        ));
    }

    #[test]
    fn should_reject_empty_password() {
        let result = CredentialTable::new([Credential::new("demo", "")]);
        assert!(matches!(
            result,
            Err(LaunchpadError::Validation(ValidationError::EmptyPassword(name))) if name == "demo"
        ));
    }

    #[test]
    fn should_parse_inline_form() {
        let table = CredentialTable::parse_inline(" john:growise2025 , demo:demo2025,").unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.verify("john", "growise2025"));
        assert!(table.verify("demo", "demo2025"));
    }

    #[test]
    fn should_keep_colons_inside_inline_passwords() {
        let table = CredentialTable::parse_inline("ops:pa:ss").unwrap();
        assert!(table.verify("ops", "pa:ss"));
    }

    #[test]
    fn should_report_position_of_malformed_inline_entry() {
        let result = CredentialTable::parse_inline("john:x,broken");
        assert!(matches!(
            result,
            Err(LaunchpadError::Validation(
                ValidationError::MalformedCredential { position: 1 }
            ))
        ));
    }

    #[test]
    fn should_count_skipped_empty_entries_in_reported_position() {
        let result = CredentialTable::parse_inline("a:b,,broken");
        assert!(matches!(
            result,
            Err(LaunchpadError::Validation(
                ValidationError::MalformedCredential { position: 2 }
            ))
        ));
    }

    #[test]
    fn should_deserialize_from_toml_table() {
        let toml = r#"
            "juan.serur@sci.tech" = "s3cret"
            demo = "demo2025"
        "#;
        let table: CredentialTable = toml::from_str(toml).unwrap();
        assert!(table.validate().is_ok());
        assert!(table.verify("juan.serur@sci.tech", "s3cret"));
        assert_eq!(table.usernames().collect::<Vec<_>>(), ["demo", "juan.serur@sci.tech"]);
    }

    #[test]
    fn should_redact_passwords_in_debug_output() {
        let debug = format!("{:?}", table());
        assert!(debug.contains("analyst"));
        assert!(!debug.contains("scitech123"));

        let debug = format!("{:?}", Credential::new("demo", "demo2025"));
        assert!(!debug.contains("demo2025"));
    }
}
