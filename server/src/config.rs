//! Server configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_PROBE_INTERVAL_SECS: u64 = 5;
pub const DEFAULT_HEALTH_PATH: &str = "/healthz";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid CLASSIFIER_URL: {0} (expected http:// or https://)")]
    InvalidClassifierUrl(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifierTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

/// Upstream classifier settings. Absent when `CLASSIFIER_URL` is unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierConfig {
    /// Base URL without trailing slash.
    pub base_url: String,
    /// Path probed until the classifier reports ready.
    pub health_path: String,
    pub timeouts: ClassifierTimeouts,
    pub probe_interval_secs: u64,
}

impl ClassifierConfig {
    #[must_use]
    pub fn probe_interval(&self) -> Duration {
        Duration::from_secs(self.probe_interval_secs.max(1))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub classifier: Option<ClassifierConfig>,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// - `PORT`: default 3000
    /// - `CLASSIFIER_URL`: upstream base URL; checks are disabled when unset
    /// - `CLASSIFIER_HEALTH_PATH`: default `/healthz`
    /// - `CLASSIFIER_REQUEST_TIMEOUT_SECS`: default 120
    /// - `CLASSIFIER_CONNECT_TIMEOUT_SECS`: default 10
    /// - `CLASSIFIER_PROBE_INTERVAL_SECS`: default 5
    ///
    /// # Errors
    ///
    /// Returns an error for an unparseable port or a non-HTTP classifier URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let classifier = match lookup("CLASSIFIER_URL").map(|v| v.trim().to_owned()) {
            Some(url) if !url.is_empty() => {
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    return Err(ConfigError::InvalidClassifierUrl(url));
                }
                Some(ClassifierConfig {
                    base_url: url.trim_end_matches('/').to_owned(),
                    health_path: normalize_path(lookup("CLASSIFIER_HEALTH_PATH").as_deref()),
                    timeouts: ClassifierTimeouts {
                        request_secs: parse_u64(&lookup, "CLASSIFIER_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
                        connect_secs: parse_u64(&lookup, "CLASSIFIER_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
                    },
                    probe_interval_secs: parse_u64(&lookup, "CLASSIFIER_PROBE_INTERVAL_SECS", DEFAULT_PROBE_INTERVAL_SECS),
                })
            }
            _ => None,
        };

        Ok(Self { port, classifier })
    }
}

fn parse_u64(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: u64) -> u64 {
    lookup(key)
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

fn normalize_path(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(p) if !p.is_empty() => {
            if p.starts_with('/') {
                p.to_owned()
            } else {
                format!("/{p}")
            }
        }
        _ => DEFAULT_HEALTH_PATH.to_owned(),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
