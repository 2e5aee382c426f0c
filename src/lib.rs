//! Bias Lens
//!
//! Audits free-text decision narratives for cognitive biases by delegating
//! the analysis to the Gemini `generateContent` API and returning a typed,
//! schema-checked assessment.
//!
//! # Features
//!
//! - Fixed auditor instruction with an optional situational context qualifier
//! - Structured response schema enforced by the service
//! - Defensive parsing: malformed model output degrades to a fallback result
//! - Environment-driven configuration with a redacted API key
//!
//! # Quick Start
//!
//! ```bash
//! GEMINI_API_KEY=AIza... bias-lens --context high-stakes "We can't quit after spending $2M."
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐   text, context   ┌──────────────┐   generateContent   ┌────────────┐
//! │  CLI / app  │──────────────────▶│ BiasAnalyzer │────────────────────▶│ Gemini API │
//! │             │◀──────────────────│   (Rust)     │◀────────────────────│            │
//! └─────────────┘  AnalysisResult   └──────────────┘     JSON reply      └────────────┘
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod gemini;
pub mod presets;
pub mod report;
pub mod traits;

#[cfg(test)]
mod test_utils;

pub use analysis::{AnalysisRequest, AnalysisResult, BiasAnalyzer, Context, DetectedBias, Metrics};
pub use error::{AnalysisError, AppError};

use config::Config;
use gemini::GeminiClient;

/// Analyze a decision text with configuration read from the environment.
///
/// The API key is read at call time; when it is missing the call fails
/// before any network request.
///
/// # Errors
///
/// - [`AppError::Analysis`] for blank or oversized text, service failures
///   and empty replies
/// - [`AppError::Config`] for missing or invalid configuration
/// - [`AppError::Gemini`] if the HTTP client cannot be built
///
/// A malformed model reply is not an error; see [`AnalysisResult::fallback`].
pub async fn analyze(text: &str, context: Context) -> Result<AnalysisResult, AppError> {
    let request = AnalysisRequest::new(text, context)?;
    let config = Config::from_env()?;
    let client = GeminiClient::from_config(&config)?;
    let analyzer = BiasAnalyzer::new(client).with_model(config.model);
    Ok(analyzer.analyze(&request).await?)
}
