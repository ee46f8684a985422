//! API connection settings.
//!
//! The base URL comes from `RPGFICHA_API_BASE_URL` (a `.env` file at the
//! working directory or any parent is honoured). Its absence is reported as a
//! [`ConfigError`] before any request is built.

use std::time::Duration;

use thiserror::Error;
use url::Url;

pub const BASE_URL_ENV: &str = "RPGFICHA_API_BASE_URL";
pub const TIMEOUT_ENV: &str = "RPGFICHA_API_TIMEOUT_SECS";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("API base URL not configured: set {0}")]
    MissingBaseUrl(&'static str),

    #[error("Invalid API base URL '{value}': {reason}")]
    InvalidBaseUrl { value: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    request_timeout: Duration,
}

impl ApiConfig {
    /// Validate and normalize a base URL. Trailing slashes are dropped so
    /// resource paths can be appended verbatim.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::MissingBaseUrl(BASE_URL_ENV));
        }

        let parsed = Url::parse(trimmed).map_err(|e| ConfigError::InvalidBaseUrl {
            value: trimmed.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                value: trimmed.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        Ok(Self {
            base_url: trimmed.trim_end_matches('/').to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        })
    }

    /// Read settings from the process environment, loading `.env` first.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup(BASE_URL_ENV).ok_or(ConfigError::MissingBaseUrl(BASE_URL_ENV))?;
        let config = Self::new(&base_url)?;

        match lookup(TIMEOUT_ENV).map(|raw| raw.trim().parse::<u64>()) {
            Some(Ok(secs)) if secs > 0 => Ok(config.with_timeout(Duration::from_secs(secs))),
            Some(_) => {
                tracing::warn!(
                    env = TIMEOUT_ENV,
                    default_secs = DEFAULT_REQUEST_TIMEOUT.as_secs(),
                    "Ignoring invalid request timeout"
                );
                Ok(config)
            }
            None => Ok(config),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Absolute URL for a resource path starting with `/`.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
