//! Configuration for the wallet API client
//!
//! Two layers:
//! - [`Config`]: file/environment configuration (TOML + `.env`), used by the CLI
//! - [`ClientConfig`]: the immutable, validated settings a [`WalletApi`] is
//!   built from. It is shared behind an `Arc` and never mutated after
//!   construction, so concurrent calls always see the same base URL.
//!
//! [`WalletApi`]: crate::api::WalletApi

use crate::errors::ApiError;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Default wallet service address
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8090/";

/// Versioned API root appended to every base URL
pub const API_VERSION_PATH: &str = "v2/";

/// Environment variable overriding `api.base_url`
pub const ENV_BASE_URL: &str = "WALLET_API_URL";

/// Environment variable overriding `api.timeout_secs`
pub const ENV_TIMEOUT_SECS: &str = "WALLET_API_TIMEOUT_SECS";

/// Configuration-related errors
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
    #[error("HTTP client error: {0}")]
    Client(String),
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Wallet service connection
    #[serde(default)]
    pub api: ApiConfig,

    /// Log output
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Defaults applied to new transaction drafts
    #[serde(default)]
    pub transaction: TransactionDefaults,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Root URL of the wallet service (`/v2/` is appended when missing)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Optional User-Agent header
    #[serde(default)]
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionDefaults {
    /// Draft time-to-live in seconds
    #[serde(default = "default_time_to_live")]
    pub time_to_live_secs: u64,
}

fn default_base_url() -> String { DEFAULT_BASE_URL.to_string() }
fn default_timeout_secs() -> u64 { 30 }
fn default_log_level() -> String { "info".to_string() }
fn default_time_to_live() -> u64 { 500 }

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl Default for TransactionDefaults {
    fn default() -> Self {
        Self {
            time_to_live_secs: default_time_to_live(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::IoError(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        toml::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(format!("Failed to parse TOML: {}", e)))
    }

    /// Load configuration from a TOML file, then apply `.env` and environment
    /// overrides
    pub fn from_file_with_env(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let mut config = Self::from_file(path)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Defaults plus `.env` and environment overrides
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let mut config = Self::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply `WALLET_API_URL` / `WALLET_API_TIMEOUT_SECS`
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(url) = std::env::var(ENV_BASE_URL) {
            self.api.base_url = url;
        }
        if let Ok(raw) = std::env::var(ENV_TIMEOUT_SECS) {
            self.api.timeout_secs = raw.trim().parse().map_err(|_| {
                ConfigError::ValidationError(format!("{} must be an integer: {}", ENV_TIMEOUT_SECS, raw))
            })?;
        }
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "api.timeout_secs must be > 0".to_string(),
            ));
        }
        if self.transaction.time_to_live_secs == 0 {
            return Err(ConfigError::ValidationError(
                "transaction.time_to_live_secs must be > 0".to_string(),
            ));
        }
        normalize_base_url(&self.api.base_url)?;
        Ok(())
    }

    /// Build the immutable client configuration
    pub fn client_config(&self) -> Result<ClientConfig, ConfigError> {
        self.validate()?;
        let mut client = ClientConfig::new(&self.api.base_url)?
            .with_timeout(Duration::from_secs(self.api.timeout_secs));
        if let Some(agent) = &self.api.user_agent {
            client = client.with_user_agent(agent.clone());
        }
        Ok(client)
    }
}

/// Normalize a base URL so it always ends in `/v2/`
pub fn normalize_base_url(raw: &str) -> Result<Url, ConfigError> {
    let mut base = raw.trim().to_string();
    if !base.starts_with("http://") && !base.starts_with("https://") {
        return Err(ConfigError::InvalidUrl(format!(
            "{} (expected an absolute http:// or https:// URL)",
            raw
        )));
    }
    if !base.ends_with('/') {
        base.push('/');
    }
    if !base.ends_with(&format!("/{}", API_VERSION_PATH)) {
        base.push_str(API_VERSION_PATH);
    }

    let url = Url::parse(&base).map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", raw, e)))?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidUrl(raw.to_string()));
    }
    // "http://" alone would parse with the version path as its host
    match url.host_str() {
        None | Some("") => return Err(ConfigError::InvalidUrl(format!("{} (missing host)", raw))),
        Some(host) if format!("{}/", host) == API_VERSION_PATH => {
            return Err(ConfigError::InvalidUrl(format!("{} (missing host)", raw)))
        }
        Some(_) => {}
    }
    Ok(url)
}

/// Immutable settings shared by every request of one client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: Url,
    timeout: Duration,
    user_agent: String,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            timeout: Duration::from_secs(default_timeout_secs()),
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Normalized base URL, always ending in `/v2/`
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Resource URL below the versioned root, one path segment per element.
    /// Segments are percent-encoded; empty, `.` and `..` segments are rejected
    /// since URL normalization would drop or collapse them.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        if let Some(bad) = segments.iter().find(|s| matches!(**s, "" | "." | "..")) {
            return Err(ApiError::InvalidUrl(format!(
                "{}{} (invalid path segment {:?})",
                self.base_url,
                segments.join("/"),
                bad
            )));
        }
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}
