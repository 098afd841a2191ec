use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://backend-siyc.onrender.com/api";
pub const DEFAULT_TIMEOUT_MS: u64 = 50_000;
pub const REGISTER_PATH: &str = "/register";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("base url must start with http:// or https:// (got {0:?})")]
    InvalidBaseUrl(String),
    #[error("timeout must be a positive number of milliseconds (got {0:?})")]
    InvalidTimeout(String),
}

/// Where the registration backend lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_ms: u64,
    /// Enables debug-level logging of navigation and requests.
    pub debug: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            debug: true,
        }
    }
}

impl ApiConfig {
    /// Defaults with optional overrides, typically sourced from build-time environment values.
    ///
    /// Blank overrides are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error when an override is present but malformed.
    pub fn with_overrides(base_url: Option<&str>, timeout_ms: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(base) = base_url.map(str::trim).filter(|s| !s.is_empty()) {
            config.base_url = base.to_string();
        }
        if let Some(raw) = timeout_ms.map(str::trim).filter(|s| !s.is_empty()) {
            config.timeout_ms = raw
                .parse::<u64>()
                .ok()
                .filter(|ms| *ms > 0)
                .ok_or_else(|| ConfigError::InvalidTimeout(raw.to_string()))?;
        }
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns an error when the base url is not http(s) or the timeout is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = self.base_url.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(self.base_url.clone()));
        }
        if self.timeout_ms == 0 {
            return Err(ConfigError::InvalidTimeout(self.timeout_ms.to_string()));
        }
        Ok(())
    }

    #[must_use]
    pub fn register_url(&self) -> String {
        format!("{}{REGISTER_PATH}", self.base_url.trim().trim_end_matches('/'))
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    #[must_use]
    pub const fn log_level(&self) -> log::LevelFilter {
        if self.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }
}
