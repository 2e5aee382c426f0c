//! Cognitive bias analysis.
//!
//! This module owns the contract with the text-generation service:
//! - [`build_prompt`] and [`SYSTEM_INSTRUCTION`] compose the request
//! - [`response_schema`] constrains the reply shape
//! - [`parse_analysis`] turns the reply into an [`AnalysisResult`]
//! - [`BiasAnalyzer`] runs one analysis end to end
//!
//! # Error model
//!
//! Transport failures and empty replies propagate as [`AnalysisError`].
//! A reply that is present but malformed never does: it is logged and
//! replaced by [`AnalysisResult::fallback`].

mod parsing;
mod prompts;
mod types;

pub use parsing::{parse_analysis, strip_code_fences};
pub use prompts::{build_prompt, context_qualifier, response_schema, SYSTEM_INSTRUCTION};
pub use types::{
    AnalysisRequest, AnalysisResult, ConfidenceLevel, Context, DetectedBias, Metrics, ScoreBand,
    FALLBACK_CORRECTION, FALLBACK_SUMMARY, INITIAL_SUMMARY, MAX_SCORE, MAX_TEXT_LENGTH,
};

use crate::error::AnalysisError;
use crate::gemini::{GenerateContentRequest, GenerationConfig, DEFAULT_MODEL};
use crate::traits::GenerationClient;

/// Runs bias analyses against a [`GenerationClient`].
///
/// Holds no per-call state, so one analyzer can serve overlapping calls.
///
/// # Example
///
/// ```no_run
/// use bias_lens::analysis::{AnalysisRequest, BiasAnalyzer, Context};
/// use bias_lens::gemini::GeminiClient;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GeminiClient::with_api_key("AIzaSy-example")?;
/// let analyzer = BiasAnalyzer::new(client);
///
/// let request = AnalysisRequest::new("We can't quit after spending $2M.", Context::HighStakes)?;
/// let result = analyzer.analyze(&request).await?;
/// println!("{}: {}", result.overall_score, result.summary);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct BiasAnalyzer<C>
where
    C: GenerationClient,
{
    client: C,
    model: String,
}

impl<C> BiasAnalyzer<C>
where
    C: GenerationClient,
{
    /// Create an analyzer using [`DEFAULT_MODEL`].
    #[must_use]
    pub fn new(client: C) -> Self {
        Self {
            client,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Use a different generation model.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// The generation model in use.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Build the service request for `request`.
    #[must_use]
    pub fn build_request(&self, request: &AnalysisRequest) -> GenerateContentRequest {
        GenerateContentRequest::new(&self.model, build_prompt(request))
            .with_system_instruction(SYSTEM_INSTRUCTION)
            .with_generation_config(GenerationConfig::json(response_schema()))
    }

    /// Analyze one decision text.
    ///
    /// Makes exactly one service call. No retries.
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::Service`] if the service is unreachable or rejects the call
    /// - [`AnalysisError::EmptyResponse`] if the reply carries no text at all
    ///
    /// A malformed reply is not an error; it yields [`AnalysisResult::fallback`].
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        tracing::debug!(
            model = %self.model,
            context = %request.context(),
            text_bytes = request.text().len(),
            "Requesting bias analysis"
        );

        let response = self
            .client
            .generate(self.build_request(request))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, model = %self.model, "Gemini API error");
                AnalysisError::Service(e)
            })?;

        if response.text.is_empty() {
            tracing::error!(
                finish_reason = ?response.finish_reason,
                "Empty response from Gemini"
            );
            return Err(AnalysisError::EmptyResponse);
        }

        match parse_analysis(&response.text) {
            Ok(result) => {
                for bias in result.unquoted_biases(request.text()) {
                    tracing::debug!(
                        bias = %bias.name,
                        trigger_phrase = %bias.trigger_phrase,
                        "Trigger phrase not found verbatim in decision text"
                    );
                }
                tracing::debug!(
                    overall_score = result.overall_score,
                    bias_count = result.biases.len(),
                    prompt_tokens = response.usage.prompt_token_count,
                    output_tokens = response.usage.candidates_token_count,
                    "Bias analysis complete"
                );
                Ok(result)
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    finish_reason = ?response.finish_reason,
                    reply_bytes = response.text.len(),
                    "Failed to parse analysis reply, returning fallback result"
                );
                Ok(AnalysisResult::fallback())
            }
        }
    }
}
