//! Test utilities and mock factories.
//!
//! Only compiled for tests (`#[cfg(test)]`).

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::analysis::{AnalysisResult, DetectedBias, Metrics};
use crate::error::GeminiError;
use crate::gemini::GenerationResponse;
use crate::traits::MockGenerationClient;

/// Mock client that always replies with `text`.
#[must_use]
pub fn mock_generation_success(text: impl Into<String>) -> MockGenerationClient {
    let text = text.into();
    let mut mock = MockGenerationClient::new();
    mock.expect_generate()
        .returning(move |_request| Ok(GenerationResponse::new(text.clone())));
    mock
}

/// Mock client that always fails with `error`.
#[must_use]
pub fn mock_generation_error(error: GeminiError) -> MockGenerationClient {
    let mut mock = MockGenerationClient::new();
    mock.expect_generate()
        .returning(move |_request| Err(error.clone()));
    mock
}

/// A well-formed result for the sunk-cost sample text.
#[must_use]
pub fn sample_result() -> AnalysisResult {
    AnalysisResult {
        overall_score: 35,
        summary: "The decision is driven by past spending rather than future value.".to_string(),
        biases: vec![DetectedBias {
            name: "Sunk Cost Fallacy".to_string(),
            description: "Prior investment is used to justify further investment.".to_string(),
            confidence: 92,
            trigger_phrase: "We've already spent $2 million".to_string(),
        }],
        metrics: Metrics {
            rationality: 30,
            objectivity: 45,
            completeness: 40,
        },
        correction: "Evaluate Project X only on expected future returns.".to_string(),
    }
}

/// [`sample_result`] as the service would return it.
#[must_use]
pub fn sample_result_json() -> String {
    serde_json::to_string_pretty(&sample_result()).unwrap()
}
