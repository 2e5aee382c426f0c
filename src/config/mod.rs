//! Configuration management.
//!
//! This module handles:
//! - Environment variable loading (with `.env` support)
//! - Configuration validation
//! - Secure API key storage via [`SecretString`]
//!
//! # Example
//!
//! ```
//! use bias_lens::config::{Config, SecretString, DEFAULT_BASE_URL, DEFAULT_MODEL};
//!
//! // Build directly; use Config::from_env() in production
//! let config = Config {
//!     api_key: SecretString::new("AIzaSy-example"),
//!     model: DEFAULT_MODEL.to_string(),
//!     base_url: DEFAULT_BASE_URL.to_string(),
//!     log_level: "info".to_string(),
//!     request_timeout_ms: 30_000,
//! };
//!
//! let debug = format!("{config:?}");
//! assert!(debug.contains("<REDACTED>"));
//! assert!(!debug.contains("AIzaSy-example"));
//! ```

mod secret;
mod validation;

pub use secret::SecretString;
pub use validation::{validate_config, MAX_TIMEOUT_MS, MIN_TIMEOUT_MS};

pub use crate::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};

use crate::error::ConfigError;

/// Primary API key variable.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Accepted alias for [`API_KEY_VAR`].
pub const API_KEY_ALIAS_VAR: &str = "API_KEY";

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default request timeout in milliseconds.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// Application configuration.
///
/// Use [`Config::from_env`] to load it. The `api_key` field is a
/// [`SecretString`] so the struct can be logged safely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Gemini API key.
    pub api_key: SecretString,
    /// Generation model identifier.
    pub model: String,
    /// API base URL (no trailing slash).
    pub base_url: String,
    /// Log level directive for the tracing subscriber.
    pub log_level: String,
    /// Bounded wait for one analysis request, in milliseconds.
    pub request_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `GEMINI_API_KEY` (or its alias `API_KEY`)
    ///
    /// Optional (with defaults):
    /// - `GEMINI_MODEL` (default: `gemini-3-flash-preview`)
    /// - `GEMINI_BASE_URL` (default: `https://generativelanguage.googleapis.com/v1beta`)
    /// - `LOG_LEVEL` (default: `info`)
    /// - `REQUEST_TIMEOUT_MS` (default: `30000`)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the API key is missing, a number does not
    /// parse, or any value fails [`validate_config`].
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors)
        let _ = dotenvy::dotenv();

        let api_key = std::env::var(API_KEY_VAR)
            .or_else(|_| std::env::var(API_KEY_ALIAS_VAR))
            .map_err(|_| ConfigError::MissingRequired {
                var: API_KEY_VAR.into(),
            })?;

        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());

        let base_url = std::env::var("GEMINI_BASE_URL")
            .map_or_else(|_| DEFAULT_BASE_URL.into(), |url| url.trim_end_matches('/').to_string());

        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.into());

        let request_timeout_ms = parse_env_u64("REQUEST_TIMEOUT_MS", DEFAULT_REQUEST_TIMEOUT_MS)?;

        let config = Self {
            api_key: SecretString::new(api_key),
            model,
            base_url,
            log_level,
            request_timeout_ms,
        };

        validate_config(&config)?;
        Ok(config)
    }
}

/// Parse an environment variable as u64, using a default if not set.
fn parse_env_u64(name: &str, default: u64) -> Result<u64, ConfigError> {
    std::env::var(name).map_or(Ok(default), |val| {
        val.trim().parse().map_err(|_| ConfigError::InvalidValue {
            var: name.into(),
            reason: "must be a positive integer".into(),
        })
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn setup_test_env() {
        env::remove_var(API_KEY_VAR);
        env::remove_var(API_KEY_ALIAS_VAR);
        env::remove_var("GEMINI_MODEL");
        env::remove_var("GEMINI_BASE_URL");
        env::remove_var("LOG_LEVEL");
        env::remove_var("REQUEST_TIMEOUT_MS");
    }

    #[test]
    #[serial]
    fn test_config_from_env_with_all_vars() {
        setup_test_env();
        env::set_var(API_KEY_VAR, "AIzaSy-test");
        env::set_var("GEMINI_MODEL", "gemini-2.5-pro");
        env::set_var("GEMINI_BASE_URL", "http://localhost:9000/v1beta/");
        env::set_var("LOG_LEVEL", "debug");
        env::set_var("REQUEST_TIMEOUT_MS", "45000");

        let config = Config::from_env().expect("should load config");

        assert_eq!(config.api_key.expose(), "AIzaSy-test");
        assert_eq!(config.model, "gemini-2.5-pro");
        assert_eq!(config.base_url, "http://localhost:9000/v1beta");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.request_timeout_ms, 45_000);
        setup_test_env();
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        setup_test_env();
        env::set_var(API_KEY_VAR, "AIzaSy-test");

        let config = Config::from_env().expect("should load config");

        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(config.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);
        setup_test_env();
    }

    #[test]
    #[serial]
    fn test_config_accepts_api_key_alias() {
        setup_test_env();
        env::set_var(API_KEY_ALIAS_VAR, "alias-key");

        let config = Config::from_env().expect("should load config");
        assert_eq!(config.api_key.expose(), "alias-key");
        setup_test_env();
    }

    #[test]
    #[serial]
    fn test_config_missing_api_key() {
        setup_test_env();

        let err = Config::from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingRequired { var } if var == API_KEY_VAR
        ));
    }

    #[test]
    #[serial]
    fn test_config_empty_api_key() {
        setup_test_env();
        env::set_var(API_KEY_VAR, "");

        let err = Config::from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { var, .. } if var == API_KEY_VAR
        ));
        setup_test_env();
    }

    #[test]
    #[serial]
    fn test_config_invalid_timeout_format() {
        setup_test_env();
        env::set_var(API_KEY_VAR, "AIzaSy-test");
        env::set_var("REQUEST_TIMEOUT_MS", "soon");

        let err = Config::from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { var, .. } if var == "REQUEST_TIMEOUT_MS"
        ));
        setup_test_env();
    }

    #[test]
    #[serial]
    fn test_config_timeout_out_of_range() {
        setup_test_env();
        env::set_var(API_KEY_VAR, "AIzaSy-test");
        env::set_var("REQUEST_TIMEOUT_MS", "100");

        let err = Config::from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { var, .. } if var == "REQUEST_TIMEOUT_MS"
        ));
        setup_test_env();
    }

    #[test]
    fn test_config_debug_redacts_api_key() {
        let config = Config {
            api_key: SecretString::new("super-secret-key"),
            model: "gemini-test".to_string(),
            base_url: "http://localhost".to_string(),
            log_level: "debug".to_string(),
            request_timeout_ms: 5000,
        };

        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret-key"));
        assert!(debug.contains("<REDACTED>"));
        assert!(debug.contains("gemini-test"));
    }

    #[test]
    #[serial]
    fn test_parse_env_u64_default_and_value() {
        env::remove_var("BIAS_LENS_TEST_U64");
        assert_eq!(parse_env_u64("BIAS_LENS_TEST_U64", 7).unwrap(), 7);
        env::set_var("BIAS_LENS_TEST_U64", " 1234 ");
        assert_eq!(parse_env_u64("BIAS_LENS_TEST_U64", 7).unwrap(), 1234);
        env::remove_var("BIAS_LENS_TEST_U64");
    }
}
