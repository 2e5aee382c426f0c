//! Configuration validation.
//!
//! Range and format checks applied after [`Config`] values are read.

use super::Config;
use crate::error::ConfigError;

/// Minimum allowed timeout in milliseconds (1 second).
pub const MIN_TIMEOUT_MS: u64 = 1000;

/// Maximum allowed timeout in milliseconds (5 minutes).
pub const MAX_TIMEOUT_MS: u64 = 300_000;

/// Validate configuration values.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if:
/// - `GEMINI_API_KEY` is blank
/// - `GEMINI_MODEL` is blank
/// - `GEMINI_BASE_URL` is not an http(s) URL
/// - `REQUEST_TIMEOUT_MS` is outside 1000..=300000
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.api_key.is_blank() {
        return Err(ConfigError::InvalidValue {
            var: "GEMINI_API_KEY".into(),
            reason: "must not be empty".into(),
        });
    }

    if config.model.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            var: "GEMINI_MODEL".into(),
            reason: "must not be empty".into(),
        });
    }

    if !(config.base_url.starts_with("http://") || config.base_url.starts_with("https://")) {
        return Err(ConfigError::InvalidValue {
            var: "GEMINI_BASE_URL".into(),
            reason: "must start with http:// or https://".into(),
        });
    }

    if !(MIN_TIMEOUT_MS..=MAX_TIMEOUT_MS).contains(&config.request_timeout_ms) {
        return Err(ConfigError::InvalidValue {
            var: "REQUEST_TIMEOUT_MS".into(),
            reason: format!("must be between {MIN_TIMEOUT_MS} and {MAX_TIMEOUT_MS} ms"),
        });
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::config::SecretString;

    fn valid_config() -> Config {
        Config {
            api_key: SecretString::new("test-key"),
            model: "gemini-3-flash-preview".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            log_level: "info".to_string(),
            request_timeout_ms: 30_000,
        }
    }

    fn invalid_var(config: &Config) -> String {
        match validate_config(config).unwrap_err() {
            ConfigError::InvalidValue { var, .. } => var,
            ConfigError::MissingRequired { var } => format!("missing:{var}"),
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_blank_api_key() {
        let mut config = valid_config();
        config.api_key = SecretString::new("  ");
        assert_eq!(invalid_var(&config), "GEMINI_API_KEY");
    }

    #[test]
    fn test_blank_model() {
        let mut config = valid_config();
        config.model = String::new();
        assert_eq!(invalid_var(&config), "GEMINI_MODEL");
    }

    #[test]
    fn test_base_url_without_scheme() {
        let mut config = valid_config();
        config.base_url = "generativelanguage.googleapis.com".to_string();
        assert_eq!(invalid_var(&config), "GEMINI_BASE_URL");
    }

    #[test]
    fn test_plain_http_base_url_allowed() {
        let mut config = valid_config();
        config.base_url = "http://127.0.0.1:8080".to_string();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_timeout_too_low() {
        let mut config = valid_config();
        config.request_timeout_ms = MIN_TIMEOUT_MS - 1;
        assert_eq!(invalid_var(&config), "REQUEST_TIMEOUT_MS");
    }

    #[test]
    fn test_timeout_too_high() {
        let mut config = valid_config();
        config.request_timeout_ms = MAX_TIMEOUT_MS + 1;
        assert_eq!(invalid_var(&config), "REQUEST_TIMEOUT_MS");
    }

    #[test]
    fn test_timeout_boundaries() {
        let mut config = valid_config();
        config.request_timeout_ms = MIN_TIMEOUT_MS;
        assert!(validate_config(&config).is_ok());
        config.request_timeout_ms = MAX_TIMEOUT_MS;
        assert!(validate_config(&config).is_ok());
    }
}
