//! Built-in decision scenarios.
//!
//! Sample narratives that each exhibit a recognizable bias, handy for
//! trying the auditor without writing a decision from scratch.

use crate::error::InputError;

/// A named sample decision narrative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    /// Short key used on the command line.
    pub key: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Decision narrative.
    pub text: &'static str,
}

/// All built-in scenarios.
pub static SCENARIOS: [Scenario; 3] = [
    Scenario {
        key: "hiring",
        label: "Hiring Decision",
        text: "I interviewed John today. He went to the same university as me, which means he clearly has a good educational foundation. He seemed a bit nervous during the technical questions, but I think he's just a 'big picture' thinker like myself. The other candidate had better test scores, but didn't have that 'spark' or culture fit. I'm going to recommend hiring John.",
    },
    Scenario {
        key: "investment",
        label: "Project Investment",
        text: "We've already spent $2 million on Project X over the last 3 years. Even though the market research shows user interest is declining, we can't just throw away that investment. If we put in another $500k, we can probably turn it around. Quitting now would be a total waste of the budget we've already used.",
    },
    Scenario {
        key: "pricing",
        label: "Price Setting",
        text: "Our competitor launched their product at $50. I think we should price ours at $45 to undercut them. It feels like the right number. I haven't looked at our unit economics in detail yet, but $45 seems close enough to their price to be competitive but cheaper.",
    },
];

/// Find a scenario by key or label, ignoring case.
#[must_use]
pub fn find(name: &str) -> Option<&'static Scenario> {
    let name = name.trim();
    SCENARIOS
        .iter()
        .find(|s| s.key.eq_ignore_ascii_case(name) || s.label.eq_ignore_ascii_case(name))
}

/// Like [`find`], but an unknown name is an error listing the valid keys.
///
/// # Errors
///
/// Returns [`InputError::UnknownPreset`] when no scenario matches.
pub fn lookup(name: &str) -> Result<&'static Scenario, InputError> {
    find(name).ok_or_else(|| InputError::UnknownPreset {
        name: name.to_string(),
        available: keys(),
    })
}

/// Comma-separated scenario keys.
#[must_use]
pub fn keys() -> String {
    SCENARIOS.iter().map(|s| s.key).collect::<Vec<_>>().join(", ")
}
