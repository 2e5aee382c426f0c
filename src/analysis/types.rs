//! Request and result types for bias analysis.

#![allow(clippy::missing_const_for_fn)]

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, ParseError, UnknownContextError};

/// Maximum accepted decision text length in bytes.
pub const MAX_TEXT_LENGTH: usize = 50_000;

/// Highest value of any score, metric or confidence.
pub const MAX_SCORE: u8 = 100;

/// Summary of the fallback result.
pub const FALLBACK_SUMMARY: &str = "Error analyzing the text. Please try again.";
/// Correction of the fallback result.
pub const FALLBACK_CORRECTION: &str = "N/A";
/// Summary of the initial result.
pub const INITIAL_SUMMARY: &str = "Awaiting input...";

// ============================================================================
// Context
// ============================================================================

/// Situational pressure the decision maker is under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Context {
    /// No qualifier.
    #[default]
    None,
    /// The outcome matters a great deal.
    HighStakes,
    /// The decision must be made quickly.
    TimePressure,
    /// Others are pushing toward an answer.
    PeerPressure,
}

impl Context {
    /// All contexts, `None` first.
    pub const ALL: [Self; 4] = [
        Self::None,
        Self::HighStakes,
        Self::TimePressure,
        Self::PeerPressure,
    ];

    /// Literal label used in prompts.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::HighStakes => "High Stakes",
            Self::TimePressure => "Time Pressure",
            Self::PeerPressure => "Peer Pressure",
        }
    }

    /// Returns true for [`Context::None`].
    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Context {
    type Err = UnknownContextError;

    /// Accepts labels case-insensitively, with spaces, dashes or
    /// underscores between words ("High Stakes", "high-stakes").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "none" => Ok(Self::None),
            "highstakes" => Ok(Self::HighStakes),
            "timepressure" => Ok(Self::TimePressure),
            "peerpressure" => Ok(Self::PeerPressure),
            _ => Err(UnknownContextError {
                value: s.to_string(),
            }),
        }
    }
}

// ============================================================================
// AnalysisRequest
// ============================================================================

/// A validated analysis request, alive for one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    text: String,
    context: Context,
}

impl AnalysisRequest {
    /// Validate and build a request.
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::EmptyInput`] if `text` is blank
    /// - [`AnalysisError::InputTooLong`] if `text` exceeds [`MAX_TEXT_LENGTH`]
    pub fn new(text: impl Into<String>, context: Context) -> Result<Self, AnalysisError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(AnalysisError::EmptyInput);
        }
        if text.len() > MAX_TEXT_LENGTH {
            return Err(AnalysisError::InputTooLong {
                len: text.len(),
                max: MAX_TEXT_LENGTH,
            });
        }
        Ok(Self { text, context })
    }

    /// The decision text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The situational context.
    #[must_use]
    pub const fn context(&self) -> Context {
        self.context
    }
}

// ============================================================================
// AnalysisResult
// ============================================================================

/// One bias the model claims to find.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedBias {
    /// Bias name (e.g. "Sunk Cost Fallacy").
    pub name: String,
    /// Why it applies here.
    pub description: String,
    /// Confidence, 0..=100.
    pub confidence: u8,
    /// Quote from the decision text that shows the bias.
    pub trigger_phrase: String,
}

impl DetectedBias {
    /// Returns true if `trigger_phrase` occurs verbatim in `text`.
    ///
    /// The service is asked to quote exactly but nothing enforces it.
    #[must_use]
    pub fn is_quoted_in(&self, text: &str) -> bool {
        !self.trigger_phrase.is_empty() && text.contains(&self.trigger_phrase)
    }

    /// Confidence bucket.
    #[must_use]
    pub const fn confidence_level(&self) -> ConfidenceLevel {
        ConfidenceLevel::from_confidence(self.confidence)
    }
}

/// Per-dimension quality scores, each 0..=100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    /// Logical soundness.
    pub rationality: u8,
    /// Freedom from personal slant.
    pub objectivity: u8,
    /// Coverage of relevant information.
    pub completeness: u8,
}

/// Structured bias assessment.
///
/// Either a full model-derived value or [`AnalysisResult::fallback`]; the
/// parser never yields a partially filled result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// 0..=100, where 100 is fully rational and unbiased.
    pub overall_score: u8,
    /// One-sentence verdict.
    pub summary: String,
    /// Detected biases in model order.
    pub biases: Vec<DetectedBias>,
    /// Dimension scores.
    pub metrics: Metrics,
    /// Rewritten reasoning or counter-recommendation.
    pub correction: String,
}

impl AnalysisResult {
    /// Result substituted when the model reply cannot be parsed.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            overall_score: 0,
            summary: FALLBACK_SUMMARY.to_string(),
            biases: Vec::new(),
            metrics: Metrics::default(),
            correction: FALLBACK_CORRECTION.to_string(),
        }
    }

    /// Placeholder before any analysis has run.
    #[must_use]
    pub fn initial() -> Self {
        Self {
            overall_score: 0,
            summary: INITIAL_SUMMARY.to_string(),
            biases: Vec::new(),
            metrics: Metrics::default(),
            correction: String::new(),
        }
    }

    /// Returns true for the fallback result.
    ///
    /// Compares text fields; `overall_score` is 0 for both sentinels.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.summary == FALLBACK_SUMMARY && self.correction == FALLBACK_CORRECTION
    }

    /// Returns true for the initial result.
    #[must_use]
    pub fn is_initial(&self) -> bool {
        self.summary == INITIAL_SUMMARY && self.correction.is_empty()
    }

    /// Score bucket for `overall_score`.
    #[must_use]
    pub const fn score_band(&self) -> ScoreBand {
        ScoreBand::from_score(self.overall_score)
    }

    /// Biases whose trigger phrase does not appear in `text`.
    pub fn unquoted_biases<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a DetectedBias> {
        self.biases.iter().filter(move |b| !b.is_quoted_in(text))
    }

    /// Check every integer field is within 0..=100.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::OutOfRange`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ParseError> {
        let scores = [
            ("overallScore", self.overall_score),
            ("metrics.rationality", self.metrics.rationality),
            ("metrics.objectivity", self.metrics.objectivity),
            ("metrics.completeness", self.metrics.completeness),
        ];
        let confidences = self
            .biases
            .iter()
            .map(|b| ("biases.confidence", b.confidence));

        match scores
            .into_iter()
            .chain(confidences)
            .find(|(_, value)| *value > MAX_SCORE)
        {
            Some((field, value)) => Err(ParseError::OutOfRange {
                field: field.to_string(),
                value,
            }),
            None => Ok(()),
        }
    }
}

impl Default for AnalysisResult {
    fn default() -> Self {
        Self::initial()
    }
}

// ============================================================================
// Bands
// ============================================================================

/// Qualitative reading of `overall_score`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    /// 80 and above.
    Rational,
    /// 50 to 79.
    Mixed,
    /// Below 50.
    Biased,
}

impl ScoreBand {
    /// Band for a score.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            80.. => Self::Rational,
            50..=79 => Self::Mixed,
            _ => Self::Biased,
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rational => "rational",
            Self::Mixed => "mixed",
            Self::Biased => "biased",
        }
    }
}

/// Qualitative reading of a bias confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceLevel {
    /// Above 80.
    High,
    /// 51 to 80.
    Medium,
    /// 50 and below.
    Low,
}

impl ConfidenceLevel {
    /// Level for a confidence value.
    #[must_use]
    pub const fn from_confidence(confidence: u8) -> Self {
        match confidence {
            81.. => Self::High,
            51..=80 => Self::Medium,
            _ => Self::Low,
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}
