//! Configuration System
//!
//! Defaults are compiled in from `config/default.toml`; the browser's
//! localStorage can override the API URL and the log level at runtime.

use serde::Deserialize;

/// Defaults shipped with the bundle
pub const DEFAULT_CONFIG: &str = include_str!("../config/default.toml");

/// localStorage key overriding `api.base_url`
pub const API_URL_OVERRIDE_KEY: &str = "quizmaster_api_url";

/// localStorage key overriding `logging.level`
pub const LOG_LEVEL_OVERRIDE_KEY: &str = "quizmaster_log_level";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote API configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Empty means same origin as the page
    #[serde(default)]
    pub base_url: String,

    #[serde(default = "default_auth_header")]
    pub auth_header: String,
}

fn default_auth_header() -> String {
    "Authentication-Token".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            auth_header: default_auth_header(),
        }
    }
}

/// Session persistence configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SessionConfig {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_storage_key() -> String {
    "user".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Parse TOML, logging a warning and using defaults when it is invalid
    pub fn from_toml_or_default(content: &str) -> Self {
        match Self::from_toml(content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{}, using defaults", e);
                Config::default()
            }
        }
    }

    /// Load the compiled-in defaults with localStorage overrides applied
    pub fn load_default() -> Self {
        let mut config = Self::from_toml_or_default(DEFAULT_CONFIG);
        config.apply_overrides(read_local_override);
        config
    }

    /// Apply overrides from a key lookup (localStorage in the browser)
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(API_URL_OVERRIDE_KEY) {
            self.api.base_url = url;
        }
        if let Some(level) = lookup(LOG_LEVEL_OVERRIDE_KEY) {
            self.logging.level = level;
        }
    }

    /// Resolve the API base URL, falling back to the given page origin
    pub fn api_base(&self, origin: &str) -> String {
        let base = if self.api.base_url.trim().is_empty() {
            origin
        } else {
            self.api.base_url.trim()
        };
        // Normalize: remove trailing slash
        base.trim_end_matches('/').to_string()
    }
}

/// Origin of the current page, empty outside a browser
pub fn page_origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

fn read_local_override(key: &str) -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage
        .get_item(key)
        .ok()
        .flatten()
        .filter(|value| !value.trim().is_empty())
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_bundled_defaults_parse() {
        let config = Config::from_toml(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.session.storage_key, "user");
        assert_eq!(config.api.auth_header, "Authentication-Token");
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = Config::from_toml("[logging]\nlevel = \"debug\"\n").unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.session.storage_key, "user");
        assert!(config.api.base_url.is_empty());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let err = Config::from_toml("[api\nbase_url = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_invalid_toml_falls_back_to_defaults() {
        let config = Config::from_toml_or_default("[api\nbase_url = 1");
        assert_eq!(config, Config::default());

        let config = Config::from_toml_or_default("[session]\nstorage_key = \"me\"\n");
        assert_eq!(config.session.storage_key, "me");
    }

    #[test]
    fn test_overrides() {
        let overrides: HashMap<&str, &str> = [
            (API_URL_OVERRIDE_KEY, "http://localhost:5000/"),
            (LOG_LEVEL_OVERRIDE_KEY, "trace"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| overrides.get(key).map(|v| v.to_string()));

        assert_eq!(config.logging.level, "trace");
        assert_eq!(config.api_base("http://ignored"), "http://localhost:5000");
    }

    #[test]
    fn test_api_base_falls_back_to_origin() {
        let config = Config::default();
        assert_eq!(config.api_base("http://127.0.0.1:8080/"), "http://127.0.0.1:8080");
        assert_eq!(config.api_base(""), "");
    }
}
