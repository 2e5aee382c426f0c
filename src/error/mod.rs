//! Error types for the bias auditor.
//!
//! This module defines a hierarchical error system:
//! - [`AppError`]: Top-level application errors
//! - [`GeminiError`]: Gemini API transport and authentication errors
//! - [`AnalysisError`]: Errors surfaced by an analysis call
//! - [`ParseError`]: Malformed model output (never surfaced to callers)
//! - [`ConfigError`]: Configuration errors
//! - [`InputError`]: Command-line input errors
//!
//! Malformed model output is deliberately kept out of [`AnalysisError`]: the
//! analyzer absorbs every [`ParseError`] into the fallback result, so callers
//! only ever see transport, configuration and input failures.
//!
//! All errors implement `Send + Sync` for async compatibility.

use thiserror::Error;

/// Message shown to end users when an analysis call fails.
pub const ANALYSIS_FAILED_MESSAGE: &str =
    "Analysis failed. Please check your API key and connection.";

/// Top-level application error.
///
/// This is the error type returned by [`crate::analyze`]. It wraps all
/// subsystem errors for unified error handling.
#[derive(Debug, Error)]
pub enum AppError {
    /// Gemini API error raised outside an analysis call (client setup).
    #[error("Gemini API error: {0}")]
    Gemini(#[from] GeminiError),

    /// Analysis call error.
    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl AppError {
    /// User-facing message for this error.
    ///
    /// Input problems get a specific hint; everything else collapses to the
    /// generic [`ANALYSIS_FAILED_MESSAGE`].
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::Analysis(AnalysisError::EmptyInput) => "Please describe a decision to analyze.",
            Self::Analysis(AnalysisError::InputTooLong { .. }) => {
                "The decision text is too long to analyze."
            }
            _ => ANALYSIS_FAILED_MESSAGE,
        }
    }
}

/// Gemini API errors.
///
/// These errors represent failures when communicating with the Gemini API.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeminiError {
    /// Authentication failed due to a missing or invalid API key.
    #[error("Authentication failed: invalid API key")]
    AuthenticationFailed,

    /// Request was rate limited.
    #[error("Rate limited: retry after {retry_after_seconds}s")]
    RateLimited {
        /// Seconds the service asked callers to wait.
        retry_after_seconds: u64,
    },

    /// The requested model is overloaded.
    #[error("Model overloaded: {model}")]
    ModelOverloaded {
        /// The model that is overloaded.
        model: String,
    },

    /// Request timed out.
    #[error("Request timeout after {timeout_ms}ms")]
    Timeout {
        /// Timeout duration in milliseconds.
        timeout_ms: u64,
    },

    /// The service rejected the request parameters.
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// Description of what's invalid.
        message: String,
    },

    /// Network communication error.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error.
        message: String,
    },

    /// Unexpected response from the API.
    #[error("Unexpected response: {message}")]
    UnexpectedResponse {
        /// Description of what was unexpected.
        message: String,
    },
}

/// Errors surfaced by an analysis call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The decision text is empty or whitespace only.
    #[error("Decision text must not be empty")]
    EmptyInput,

    /// The decision text exceeds the accepted size.
    #[error("Decision text too large: {len} > {max} bytes")]
    InputTooLong {
        /// Length of the rejected text in bytes.
        len: usize,
        /// Maximum accepted length in bytes.
        max: usize,
    },

    /// The service answered without any text.
    #[error("Empty response from AI")]
    EmptyResponse,

    /// The service could not be reached or rejected the call.
    #[error(transparent)]
    Service(#[from] GeminiError),
}

/// Malformed model output.
///
/// Produced by [`crate::analysis::parse_analysis`]. The analyzer never
/// returns this to callers; it logs it and substitutes the fallback result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The reply is not valid JSON or does not match the result schema.
    #[error("Invalid analysis JSON: {message}")]
    InvalidJson {
        /// Description of the parsing error.
        message: String,
    },

    /// A score falls outside 0..=100.
    #[error("Value out of range for {field}: {value}")]
    OutOfRange {
        /// The offending field.
        field: String,
        /// The value the model produced.
        value: u8,
    },
}

/// Configuration errors.
///
/// These errors represent failures in configuration loading and validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Required configuration is missing.
    #[error("Missing required: {var}")]
    MissingRequired {
        /// The missing variable name.
        var: String,
    },

    /// Configuration value is invalid.
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue {
        /// The variable name.
        var: String,
        /// Why the value is invalid.
        reason: String,
    },
}

/// Failures gathering the decision text on the command line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    /// No built-in scenario has this name.
    #[error("Unknown preset '{name}'. Available: {available}")]
    UnknownPreset {
        /// The requested name.
        name: String,
        /// Comma-separated scenario keys.
        available: String,
    },

    /// Standard input could not be read.
    #[error("Failed to read stdin: {message}")]
    Stdin {
        /// The underlying I/O error.
        message: String,
    },
}

impl From<std::io::Error> for InputError {
    fn from(err: std::io::Error) -> Self {
        Self::Stdin {
            message: err.to_string(),
        }
    }
}

/// An unrecognized situational context label.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown context '{value}': expected one of None, High Stakes, Time Pressure, Peer Pressure")]
pub struct UnknownContextError {
    /// The label that failed to parse.
    pub value: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use static_assertions::assert_impl_all;

    assert_impl_all!(AppError: Send, Sync, std::error::Error);
    assert_impl_all!(GeminiError: Send, Sync, std::error::Error, Clone);
    assert_impl_all!(AnalysisError: Send, Sync, std::error::Error, Clone);
    assert_impl_all!(ParseError: Send, Sync, std::error::Error, Clone);
    assert_impl_all!(ConfigError: Send, Sync, std::error::Error, Clone);
    assert_impl_all!(InputError: Send, Sync, std::error::Error, Clone);

    #[test]
    fn test_app_error_display_config() {
        let err = AppError::from(ConfigError::MissingRequired {
            var: "GEMINI_API_KEY".into(),
        });
        assert_eq!(
            err.to_string(),
            "Configuration error: Missing required: GEMINI_API_KEY"
        );
    }

    #[test]
    fn test_app_error_display_analysis() {
        let err = AppError::from(AnalysisError::EmptyResponse);
        assert_eq!(err.to_string(), "Analysis error: Empty response from AI");
    }

    #[test]
    fn test_analysis_error_service_is_transparent() {
        let err = AnalysisError::from(GeminiError::AuthenticationFailed);
        assert_eq!(err.to_string(), "Authentication failed: invalid API key");
    }

    #[test]
    fn test_gemini_error_display_rate_limited() {
        let err = GeminiError::RateLimited {
            retry_after_seconds: 30,
        };
        assert_eq!(err.to_string(), "Rate limited: retry after 30s");
    }

    #[test]
    fn test_gemini_error_display_timeout() {
        let err = GeminiError::Timeout { timeout_ms: 30_000 };
        assert_eq!(err.to_string(), "Request timeout after 30000ms");
    }

    #[test]
    fn test_input_too_long_display() {
        let err = AnalysisError::InputTooLong { len: 10, max: 5 };
        assert_eq!(err.to_string(), "Decision text too large: 10 > 5 bytes");
    }

    #[test]
    fn test_input_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::InvalidData, "stream did not contain valid UTF-8");
        assert_eq!(
            InputError::from(io).to_string(),
            "Failed to read stdin: stream did not contain valid UTF-8"
        );
    }

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::OutOfRange {
            field: "overallScore".into(),
            value: 140,
        };
        assert_eq!(err.to_string(), "Value out of range for overallScore: 140");
    }

    #[test]
    fn test_user_message_generic_for_service_failures() {
        let err = AppError::from(AnalysisError::Service(GeminiError::Network {
            message: "connection refused".into(),
        }));
        assert_eq!(err.user_message(), ANALYSIS_FAILED_MESSAGE);

        let err = AppError::from(ConfigError::MissingRequired {
            var: "GEMINI_API_KEY".into(),
        });
        assert_eq!(err.user_message(), ANALYSIS_FAILED_MESSAGE);
    }

    #[test]
    fn test_user_message_for_empty_input() {
        let err = AppError::from(AnalysisError::EmptyInput);
        assert_eq!(err.user_message(), "Please describe a decision to analyze.");
    }

    #[test]
    fn test_unknown_context_display() {
        let err = UnknownContextError {
            value: "Panic".into(),
        };
        assert!(err.to_string().contains("Unknown context 'Panic'"));
    }
}
