//! Prompt text and response schema for bias analysis.
//!
//! The system instruction is fixed. The user prompt differs between
//! contexts only by the optional qualifier line.

use super::types::{AnalysisRequest, Context};
use crate::gemini::Schema;

/// System instruction sent with every analysis.
pub const SYSTEM_INSTRUCTION: &str = r#"You are a cognitive science auditor that reviews human decision-making.
Your job is to detect cognitive biases (for example Confirmation Bias, Anchoring, Sunk Cost Fallacy, Availability Heuristic, Framing Effect) in the decision text you are given.

You must output strictly valid JSON.

Analyze the text for:
1. Implicit and explicit biases.
2. Logical fallacies.
3. Emotional reasoning versus data-driven reasoning.

Output schema:
{
  "overallScore": integer (0-100, where 100 is perfectly unbiased and rational),
  "summary": string (one-sentence executive summary of the bias level),
  "biases": array of objects {
    "name": string (name of the bias),
    "description": string (brief explanation of why it applies here),
    "confidence": integer (0-100),
    "triggerPhrase": string (exact quote from the text that indicates this bias)
  },
  "metrics": {
    "rationality": integer (0-100),
    "objectivity": integer (0-100),
    "completeness": integer (0-100)
  },
  "correction": string (the decision rewritten without the bias while keeping its core intent; if the intent itself is flawed, a counter-recommendation)
}"#;

/// Qualifier line for `context`, or `None` when no context applies.
#[must_use]
pub fn context_qualifier(context: Context) -> Option<String> {
    (!context.is_none()).then(|| format!("The decision maker is under: {}.", context.label()))
}

/// Compose the user prompt for a request.
///
/// ```
/// use bias_lens::analysis::{build_prompt, AnalysisRequest, Context};
///
/// let request = AnalysisRequest::new("Buy now.", Context::TimePressure).unwrap();
/// assert_eq!(
///     build_prompt(&request),
///     "The decision maker is under: Time Pressure.\n\nAnalyze the following decision text:\n\"Buy now.\""
/// );
/// ```
#[must_use]
pub fn build_prompt(request: &AnalysisRequest) -> String {
    let body = format!(
        "Analyze the following decision text:\n\"{}\"",
        request.text()
    );
    match context_qualifier(request.context()) {
        Some(qualifier) => format!("{qualifier}\n\n{body}"),
        None => body,
    }
}

/// Structured schema mirroring [`super::AnalysisResult`].
///
/// Every property at every level is required.
#[must_use]
pub fn response_schema() -> Schema {
    let bias = Schema::object([
        ("name", Schema::string()),
        ("description", Schema::string()),
        ("confidence", Schema::integer()),
        ("triggerPhrase", Schema::string()),
    ]);

    let metrics = Schema::object([
        ("rationality", Schema::integer()),
        ("objectivity", Schema::integer()),
        ("completeness", Schema::integer()),
    ]);

    Schema::object([
        ("overallScore", Schema::integer()),
        ("summary", Schema::string()),
        ("biases", Schema::array(bias)),
        ("metrics", metrics),
        ("correction", Schema::string()),
    ])
}
