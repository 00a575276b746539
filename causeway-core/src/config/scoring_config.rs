use serde::{Deserialize, Serialize};

use super::defaults;

/// Heuristic constants for intervention confidence and counterfactual plausibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Confidence reported when an intervention predicts no effects. Default: 0.5.
    pub no_effect_confidence: f64,
    /// Starting plausibility for every counterfactual. Default: 0.7.
    pub base_plausibility: f64,
    /// Requesting more changes than this triggers the change penalty. Default: 3.
    pub change_count_threshold: usize,
    /// Multiplier applied for too many simultaneous changes. Default: 0.8.
    pub change_count_penalty: f64,
    /// Producing more outcomes than this triggers the outcome penalty. Default: 5.
    pub outcome_count_threshold: usize,
    /// Multiplier applied for sprawling outcome sets. Default: 0.9.
    pub outcome_count_penalty: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            no_effect_confidence: defaults::DEFAULT_NO_EFFECT_CONFIDENCE,
            base_plausibility: defaults::DEFAULT_BASE_PLAUSIBILITY,
            change_count_threshold: defaults::DEFAULT_CHANGE_COUNT_THRESHOLD,
            change_count_penalty: defaults::DEFAULT_CHANGE_COUNT_PENALTY,
            outcome_count_threshold: defaults::DEFAULT_OUTCOME_COUNT_THRESHOLD,
            outcome_count_penalty: defaults::DEFAULT_OUTCOME_COUNT_PENALTY,
        }
    }
}
