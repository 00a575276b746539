//! Fixed-bucket strength and certainty estimation from qualifier words.

use super::phrase::contains_any;

pub const STRONG_WORDS: &[&str] = &[
    "strongly",
    "significantly",
    "greatly",
    "substantially",
    "dramatically",
];
pub const MODERATE_WORDS: &[&str] = &["moderately", "somewhat", "partially"];
pub const WEAK_WORDS: &[&str] = &["slightly", "marginally", "weakly", "may"];

pub const CERTAIN_WORDS: &[&str] = &[
    "proven",
    "demonstrated",
    "established",
    "confirmed",
    "definitely",
];
pub const HEDGING_WORDS: &[&str] = &[
    "possibly",
    "might",
    "perhaps",
    "uncertain",
    "unclear",
    "suspected",
];

pub const STRONG: f64 = 0.9;
pub const MODERATE: f64 = 0.6;
pub const WEAK: f64 = 0.3;
pub const CERTAIN: f64 = 0.9;
pub const HEDGED: f64 = 0.5;

/// Effect magnitude implied by `text` (lowercase). Strong beats moderate
/// beats weak; `default` when no qualifier is present.
pub fn estimate_strength(text: &str, default: f64) -> f64 {
    if contains_any(text, STRONG_WORDS) {
        STRONG
    } else if contains_any(text, MODERATE_WORDS) {
        MODERATE
    } else if contains_any(text, WEAK_WORDS) {
        WEAK
    } else {
        default
    }
}

/// Certainty that the relationship in `text` (lowercase) is real.
pub fn estimate_confidence(text: &str, default: f64) -> f64 {
    if contains_any(text, CERTAIN_WORDS) {
        CERTAIN
    } else if contains_any(text, HEDGING_WORDS) {
        HEDGED
    } else {
        default
    }
}

/// Is `word` one of the qualifiers above? Used to keep them out of names.
pub fn is_qualifier(word: &str) -> bool {
    [
        STRONG_WORDS,
        MODERATE_WORDS,
        WEAK_WORDS,
        CERTAIN_WORDS,
        HEDGING_WORDS,
    ]
    .iter()
    .any(|words| words.contains(&word))
}
