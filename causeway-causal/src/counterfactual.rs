//! "What would have happened?": one independent surgery + trace per change.
//!
//! Every change is evaluated against the original graph, so changes never
//! compound through each other's surgery. Outcomes merge by variable name;
//! changes are applied in name order and the last writer wins.

use std::collections::BTreeMap;

use chrono::Utc;
use serde_json::{json, Value};
use tracing::debug;

use causeway_core::config::CausewayConfig;
use causeway_core::errors::{CausewayError, CausewayResult};
use causeway_core::models::{CausalGraph, Counterfactual, Metadata};

use crate::graph::perform_surgery;
use crate::scoring::counterfactual_plausibility;
use crate::traversal;

/// Reject an empty scenario or an empty change set.
fn validate_request(scenario: &str, changes: &BTreeMap<String, String>) -> CausewayResult<()> {
    if scenario.trim().is_empty() {
        return Err(CausewayError::invalid_argument(
            "scenario",
            "scenario description required",
        ));
    }
    if changes.is_empty() {
        return Err(CausewayError::invalid_argument(
            "changes",
            "at least one change required",
        ));
    }
    Ok(())
}

/// Evaluate `changes` (variable name -> directive) against `graph`.
///
/// Fails with `InvalidArgument` on a blank scenario or an empty change set.
/// Change names that do not resolve are skipped and listed under
/// `unresolved_changes` in the result metadata.
pub fn generate(
    graph: &CausalGraph,
    scenario: &str,
    changes: &BTreeMap<String, String>,
    config: &CausewayConfig,
    mint_id: impl FnOnce() -> String,
) -> CausewayResult<Counterfactual> {
    validate_request(scenario, changes)?;

    let mut outcomes = BTreeMap::new();
    let mut unresolved = Vec::new();
    let mut surgeries = 0usize;
    let mut effect_count = 0usize;

    for (name, directive) in changes {
        let Some(variable) = graph.resolve_variable(name) else {
            debug!(graph_id = %graph.id, change = %name, "counterfactual change does not resolve");
            unresolved.push(name.clone());
            continue;
        };

        let surgical = perform_surgery(graph, &variable.id);
        surgeries += 1;

        let effects = traversal::trace(&surgical, &variable.id, directive, &config.trace);
        effect_count += effects.len();
        for effect in effects {
            outcomes.insert(effect.variable, effect.effect);
        }
    }

    let plausibility = counterfactual_plausibility(changes.len(), outcomes.len(), &config.scoring);

    let mut metadata = Metadata::new();
    metadata.insert("graph_surgery_applied".to_string(), Value::Bool(surgeries > 0));
    metadata.insert("surgery_count".to_string(), json!(surgeries));
    metadata.insert("effect_count".to_string(), json!(effect_count));
    if !unresolved.is_empty() {
        metadata.insert("unresolved_changes".to_string(), json!(unresolved));
    }

    Ok(Counterfactual {
        id: mint_id(),
        graph_id: graph.id.clone(),
        scenario: scenario.to_string(),
        changes: changes.clone(),
        outcomes,
        plausibility,
        metadata,
        created_at: Utc::now(),
    })
}
