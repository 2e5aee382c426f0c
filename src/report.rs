//! Plain-text rendering of analysis results.

use std::fmt;

use crate::analysis::AnalysisResult;

/// Terminal report for one result.
///
/// Sentinel results render their summary only, since their scores carry
/// no information.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a>(pub &'a AnalysisResult);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;

        if result.is_fallback() || result.is_initial() {
            return writeln!(f, "{}", result.summary);
        }

        writeln!(
            f,
            "Overall score: {}/100 ({})",
            result.overall_score,
            result.score_band().label()
        )?;
        writeln!(f, "{}", result.summary)?;
        writeln!(f)?;

        let metrics = &result.metrics;
        writeln!(f, "Metrics")?;
        writeln!(f, "  Rationality:  {:>3}", metrics.rationality)?;
        writeln!(f, "  Objectivity:  {:>3}", metrics.objectivity)?;
        writeln!(f, "  Completeness: {:>3}", metrics.completeness)?;
        writeln!(f)?;

        writeln!(f, "Detected biases")?;
        if result.biases.is_empty() {
            writeln!(f, "  No specific cognitive biases detected.")?;
        }
        for (i, bias) in result.biases.iter().enumerate() {
            writeln!(
                f,
                "  {}. {} ({}% confidence, {})",
                i + 1,
                bias.name,
                bias.confidence,
                bias.confidence_level().label()
            )?;
            writeln!(f, "     {}", bias.description)?;
            writeln!(f, "     Trigger: \"{}\"", bias.trigger_phrase)?;
        }
        writeln!(f)?;

        writeln!(f, "Corrected reasoning")?;
        writeln!(f, "  {}", result.correction)
    }
}

/// Render a result as a terminal report.
#[must_use]
pub fn render(result: &AnalysisResult) -> String {
    Report(result).to_string()
}
