//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `launchpad.toml` in the working directory, or the file named by
//! `LAUNCHPAD_CONFIG`. Every field except the user table has a sensible
//! default. Environment variables take precedence over file values.
//!
//! One file describes one portal deployment: who may log in, which targets
//! are shown, and how the page is branded.

use std::path::PathBuf;

use launchpad_adapter_http_axum::state::{DEFAULT_REALM, is_valid_realm};
use launchpad_adapter_probe_reqwest::{ProbeConfig, ProbeError};
use launchpad_domain::credential::CredentialTable;
use launchpad_domain::error::LaunchpadError;
use launchpad_domain::target::{Target, TargetRegistry};
use launchpad_domain::theme::Theme;
use serde::Deserialize;

/// Config file used when `LAUNCHPAD_CONFIG` is not set.
pub const DEFAULT_CONFIG_PATH: &str = "launchpad.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Basic-Auth realm and user table.
    pub auth: AuthConfig,
    /// Reachability probe settings.
    pub probe: ProbeConfig,
    /// Static asset settings.
    pub assets: AssetsConfig,
    /// Portal branding.
    pub theme: Theme,
    /// Cards, in display order.
    pub targets: Vec<Target>,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Basic-Auth configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Realm announced in the `WWW-Authenticate` challenge.
    pub realm: String,
    /// `username = "password"` entries.
    pub users: CredentialTable,
}

/// Static asset configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Directory served under `/assets`.
    pub dir: PathBuf,
}

impl Config {
    /// Load configuration from the config file (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file is malformed, an explicitly named
    /// file is missing, an override is invalid, or validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var("LAUNCHPAD_CONFIG") {
            Ok(path) => Self::from_required_file(&path)?,
            Err(_) => Self::from_file(DEFAULT_CONFIG_PATH)?,
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn from_required_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(ConfigError::Parse)
    }

    /// Apply overrides looked up by environment variable name.
    fn apply_overrides(
        &mut self,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(val) = var("LAUNCHPAD_HOST") {
            self.server.host = val;
        }
        if let Some(val) = var("LAUNCHPAD_PORT")
            && let Ok(port) = val.parse()
        {
            self.server.port = port;
        }
        if let Some(val) = var("LAUNCHPAD_BIND")
            && let Some((host, port)) = val.rsplit_once(':')
        {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = var("LAUNCHPAD_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("LAUNCHPAD_PROBE_TIMEOUT_SECS") {
            self.probe.timeout_secs = val.trim().parse().map_err(|_| {
                ConfigError::Validation(format!(
                    "LAUNCHPAD_PROBE_TIMEOUT_SECS must be a number of seconds, got {val:?}"
                ))
            })?;
        }
        if let Some(val) = var("LAUNCHPAD_USERS") {
            self.auth.users = CredentialTable::parse_inline(&val)?;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if !is_valid_realm(&self.auth.realm) {
            return Err(ConfigError::Validation(format!(
                "auth realm {:?} must be non-empty printable ASCII without '\"'",
                self.auth.realm
            )));
        }
        self.auth.users.validate()?;
        self.probe.validate()?;
        self.registry()?;
        Ok(())
    }

    /// Build the validated target registry.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Domain`] if a target is invalid, keys collide,
    /// or more than one target is probed.
    pub fn registry(&self) -> Result<TargetRegistry, ConfigError> {
        Ok(TargetRegistry::new(self.targets.clone())?)
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8050,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "launchpadd=info,launchpad=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            realm: DEFAULT_REALM.to_string(),
            users: CredentialTable::default(),
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("assets"),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
    /// Invalid users or targets.
    #[error("invalid configuration")]
    Domain(#[from] LaunchpadError),
    /// Invalid probe settings.
    #[error("invalid probe configuration")]
    Probe(#[from] ProbeError),
}
