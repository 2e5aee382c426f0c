//! Gemini API client.
//!
//! This module provides:
//! - HTTP client for `models/{model}:generateContent`
//! - Status code classification into [`GeminiError`]
//! - Response flattening into [`GenerationResponse`]
//!
//! Each call is a single attempt; nothing is retried.

#![allow(clippy::missing_errors_doc)]

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;

use super::config::ClientConfig;
use super::types::{GenerateContentRequest, GenerateContentResponse, GenerationResponse};
use crate::config::{Config, SecretString};
use crate::error::GeminiError;
use crate::traits::GenerationClient;

/// Header carrying the API key.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Retry-after used when a 429 carries no usable header.
const DEFAULT_RETRY_AFTER_SECONDS: u64 = 60;

/// Gemini API client.
#[derive(Debug)]
pub struct GeminiClient {
    client: Client,
    api_key: SecretString,
    config: ClientConfig,
}

impl GeminiClient {
    /// Create a new Gemini client.
    pub fn new(api_key: impl Into<SecretString>, config: ClientConfig) -> Result<Self, GeminiError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| GeminiError::Network {
                message: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            config,
        })
    }

    /// Create a client with default configuration.
    pub fn with_api_key(api_key: impl Into<SecretString>) -> Result<Self, GeminiError> {
        Self::new(api_key, ClientConfig::default())
    }

    /// Create a client from application configuration.
    pub fn from_config(config: &Config) -> Result<Self, GeminiError> {
        Self::new(config.api_key.clone(), ClientConfig::from(config))
    }

    /// Get the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Get the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send one `generateContent` request.
    pub async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerationResponse, GeminiError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url, request.model
        );
        let start = Instant::now();

        tracing::debug!(
            url = %url,
            model = %request.model,
            prompt_bytes = request.text_len(),
            timeout_ms = self.config.timeout_ms,
            "Starting Gemini API request"
        );

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, self.api_key.expose())
            .json(request)
            .send()
            .await
            .map_err(|e| {
                let elapsed_ms = elapsed_ms(start);
                if e.is_timeout() {
                    tracing::error!(
                        url = %url,
                        elapsed_ms,
                        timeout_ms = self.config.timeout_ms,
                        "Gemini API request timed out"
                    );
                    GeminiError::Timeout {
                        timeout_ms: self.config.timeout_ms,
                    }
                } else {
                    tracing::error!(url = %url, elapsed_ms, error = %e, "Gemini API request failed");
                    GeminiError::Network {
                        message: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        tracing::debug!(
            url = %url,
            status = %status,
            elapsed_ms = elapsed_ms(start),
            "Gemini API response received"
        );

        match status.as_u16() {
            400 => {
                let body = response.text().await.unwrap_or_default();
                return Err(GeminiError::InvalidRequest { message: body });
            }
            401 | 403 => {
                return Err(GeminiError::AuthenticationFailed);
            }
            429 => {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.trim().parse().ok())
                    .unwrap_or(DEFAULT_RETRY_AFTER_SECONDS);
                return Err(GeminiError::RateLimited {
                    retry_after_seconds: retry_after,
                });
            }
            503 => {
                return Err(GeminiError::ModelOverloaded {
                    model: request.model.clone(),
                });
            }
            _ if !status.is_success() => {
                let body = response.text().await.unwrap_or_default();
                return Err(GeminiError::UnexpectedResponse {
                    message: format!("Status {status}: {body}"),
                });
            }
            _ => {}
        }

        let body: GenerateContentResponse =
            response
                .json()
                .await
                .map_err(|e| GeminiError::UnexpectedResponse {
                    message: format!("Failed to parse response: {e}"),
                })?;

        Self::parse_response(body)
    }

    /// Flatten the first candidate into a [`GenerationResponse`].
    ///
    /// A missing candidate is only an error when the prompt was blocked;
    /// otherwise the text is empty and the caller decides.
    fn parse_response(response: GenerateContentResponse) -> Result<GenerationResponse, GeminiError> {
        let usage = response.usage_metadata.unwrap_or_default();

        let Some(candidate) = response.candidates.into_iter().next() else {
            if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
                return Err(GeminiError::UnexpectedResponse {
                    message: format!("Prompt blocked: {reason}"),
                });
            }
            return Ok(GenerationResponse::new(String::new()).with_usage(usage));
        };

        let text: String = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter(|part| part.thought != Some(true))
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        let mut result = GenerationResponse::new(text).with_usage(usage);
        if let Some(reason) = candidate.finish_reason {
            result = result.with_finish_reason(reason);
        }
        Ok(result)
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

#[async_trait]
impl GenerationClient for GeminiClient {
    async fn generate(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerationResponse, GeminiError> {
        self.generate_content(&request).await
    }
}
