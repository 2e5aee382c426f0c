//! Parsing of model replies into [`AnalysisResult`].
//!
//! Model output is untrusted. [`parse_analysis`] accepts only a reply that
//! matches the full schema with in-range scores; anything else is a
//! [`ParseError`] the analyzer turns into the fallback result.

use super::types::AnalysisResult;
use crate::error::ParseError;

const FENCE: &str = "```";

/// Strip a surrounding markdown code fence, with or without a language tag.
///
/// Text without fences is returned trimmed.
///
/// ```
/// use bias_lens::analysis::strip_code_fences;
///
/// assert_eq!(strip_code_fences("```json\n{\"a\": 1}\n```"), "{\"a\": 1}");
/// assert_eq!(strip_code_fences("  {\"a\": 1} "), "{\"a\": 1}");
/// ```
#[must_use]
pub fn strip_code_fences(text: &str) -> &str {
    let mut body = text.trim();
    if let Some(rest) = body.strip_prefix(FENCE) {
        // Language tag runs up to the first non-alphanumeric character
        let tag_len = rest
            .find(|c: char| !c.is_ascii_alphanumeric())
            .unwrap_or(rest.len());
        body = &rest[tag_len..];
    }
    if let Some(rest) = body.strip_suffix(FENCE) {
        body = rest;
    }
    body.trim()
}

/// Parse a model reply into a validated [`AnalysisResult`].
///
/// # Errors
///
/// - [`ParseError::InvalidJson`] for malformed JSON or a schema mismatch
///   (missing field, wrong type, negative or oversized integer)
/// - [`ParseError::OutOfRange`] for a score above 100
pub fn parse_analysis(text: &str) -> Result<AnalysisResult, ParseError> {
    let result: AnalysisResult =
        serde_json::from_str(strip_code_fences(text)).map_err(|e| ParseError::InvalidJson {
            message: e.to_string(),
        })?;
    result.validate()?;
    Ok(result)
}
