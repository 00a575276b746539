//! Confidence and plausibility heuristics.

use causeway_core::config::ScoringConfig;
use causeway_core::models::PredictedEffect;

/// Overall confidence of an intervention.
///
/// Formula: mean over effects of `probability / path_length`, clamped to [0, 1].
/// Closer effects weigh more. With no effects the result is
/// `config.no_effect_confidence` (0.5, maximal uncertainty).
pub fn intervention_confidence(effects: &[PredictedEffect], config: &ScoringConfig) -> f64 {
    if effects.is_empty() {
        return config.no_effect_confidence.clamp(0.0, 1.0);
    }

    let weighted: f64 = effects
        .iter()
        .map(|e| e.probability / e.path_length.max(1) as f64)
        .sum();

    let mean = weighted / effects.len() as f64;
    if mean.is_nan() {
        return 0.0;
    }
    mean.clamp(0.0, 1.0)
}

/// Plausibility of a counterfactual: a crude penalty against elaborate scenarios.
///
/// Starts at `base_plausibility` (0.7), times `change_count_penalty` (0.8) for
/// more than `change_count_threshold` (3) changes, times `outcome_count_penalty`
/// (0.9) for more than `outcome_count_threshold` (5) outcomes.
pub fn counterfactual_plausibility(
    change_count: usize,
    outcome_count: usize,
    config: &ScoringConfig,
) -> f64 {
    let mut plausibility = config.base_plausibility;
    if change_count > config.change_count_threshold {
        plausibility *= config.change_count_penalty;
    }
    if outcome_count > config.outcome_count_threshold {
        plausibility *= config.outcome_count_penalty;
    }
    plausibility.clamp(0.0, 1.0)
}
