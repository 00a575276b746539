//! Correlation-vs-causation advisor.
//!
//! Stateless: classifies how a sentence phrases a relationship and returns
//! the checks a reader should make before trusting it. Causal wording takes
//! precedence when both kinds are present.

use causeway_core::errors::{CausewayError, CausewayResult};
use causeway_core::models::{ClaimKind, CorrelationAssessment};

use crate::extraction::phrase::contains_any;

const CAUSAL_INDICATORS: &[&str] = &[
    "causes",
    "leads to",
    "results in",
    "produces",
    "triggers",
    "creates",
];

const CORRELATION_INDICATORS: &[&str] = &[
    "correlated with",
    "associated with",
    "related to",
    "linked to",
    "connected to",
];

const CAUSAL_ANALYSIS: &str = "This observation claims a causal relationship. Before relying on it, \
    check: (1) temporal precedence, that the cause comes before the effect; \
    (2) that no confounding variable drives both; \
    (3) that a plausible mechanism connects them.";

const CORRELATION_ANALYSIS: &str = "This observation reports a correlation, which does not by itself \
    establish causation. Consider: (1) whether a third variable explains both; \
    (2) whether the causation could run in reverse; \
    (3) whether the association is coincidental.";

const UNCLEAR_ANALYSIS: &str = "The type of relationship is unclear. Establishing causation requires: \
    (1) temporal ordering; (2) elimination of confounders; \
    (3) a demonstrated mechanism; (4) ideally, evidence from an experimental intervention.";

/// Classify free text as causal, correlational, or unclear wording.
pub fn classify(observation: &str) -> ClaimKind {
    let lower = observation.to_lowercase();
    if contains_any(&lower, CAUSAL_INDICATORS) {
        ClaimKind::Causal
    } else if contains_any(&lower, CORRELATION_INDICATORS) {
        ClaimKind::Correlational
    } else {
        ClaimKind::Unclear
    }
}

/// Canned guidance text for each claim kind.
pub fn guidance(kind: ClaimKind) -> &'static str {
    match kind {
        ClaimKind::Causal => CAUSAL_ANALYSIS,
        ClaimKind::Correlational => CORRELATION_ANALYSIS,
        ClaimKind::Unclear => UNCLEAR_ANALYSIS,
    }
}

/// Classify `observation` and attach guidance. Fails on empty input.
pub fn analyze(observation: &str) -> CausewayResult<CorrelationAssessment> {
    if observation.trim().is_empty() {
        return Err(CausewayError::invalid_argument(
            "observation",
            "observation cannot be empty",
        ));
    }

    let kind = classify(observation);
    Ok(CorrelationAssessment {
        observation: observation.to_string(),
        kind,
        analysis: guidance(kind).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn causal_wording() {
        assert_eq!(classify("Smoking causes cancer"), ClaimKind::Causal);
        assert_eq!(classify("Heat TRIGGERS storms"), ClaimKind::Causal);
    }

    #[test]
    fn correlation_wording() {
        assert_eq!(
            classify("Ice cream sales are correlated with drownings"),
            ClaimKind::Correlational
        );
    }

    #[test]
    fn causal_takes_precedence() {
        assert_eq!(
            classify("Stress is linked to and causes insomnia"),
            ClaimKind::Causal
        );
    }

    #[test]
    fn neither_is_unclear() {
        assert_eq!(classify("Sales went up in July"), ClaimKind::Unclear);
    }

    #[test]
    fn empty_observation_is_rejected() {
        let err = analyze("   ").unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn analysis_text_matches_kind() {
        let assessment = analyze("Exercise is associated with longevity").unwrap();
        assert_eq!(assessment.kind, ClaimKind::Correlational);
        assert!(assessment.analysis.contains("reverse"));
    }
}
