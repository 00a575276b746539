//! "What happens if I force X?": surgery on X, then a forward trace from X.

use chrono::Utc;
use serde_json::Value;

use causeway_core::config::CausewayConfig;
use causeway_core::constants::GRAPH_SURGERY_KEY;
use causeway_core::errors::{CausewayError, CausewayResult};
use causeway_core::models::{CausalGraph, CausalIntervention, Metadata};

use crate::graph::perform_surgery;
use crate::scoring::intervention_confidence;
use crate::traversal;

/// Simulate `do(variable_ref = intervention_type)` on `graph`.
///
/// `variable_ref` resolves by id or case-insensitive name. `mint_id` is only
/// called once the variable has resolved.
pub fn simulate(
    graph: &CausalGraph,
    variable_ref: &str,
    intervention_type: &str,
    config: &CausewayConfig,
    mint_id: impl FnOnce() -> String,
) -> CausewayResult<CausalIntervention> {
    let target = graph
        .resolve_variable(variable_ref)
        .ok_or_else(|| CausewayError::variable_not_found(variable_ref))?;

    let surgical = perform_surgery(graph, &target.id);
    let predicted_effects =
        traversal::trace(&surgical, &target.id, intervention_type, &config.trace);
    let confidence = intervention_confidence(&predicted_effects, &config.scoring);

    let mut metadata = Metadata::new();
    metadata.insert("graph_surgery_applied".to_string(), Value::Bool(true));
    metadata.insert("variable_id".to_string(), Value::String(target.id.clone()));
    if let Some(surgery) = surgical.metadata.get(GRAPH_SURGERY_KEY) {
        metadata.insert(GRAPH_SURGERY_KEY.to_string(), surgery.clone());
    }
    metadata.insert(
        "intervention_note".to_string(),
        Value::String(
            "Applied do-calculus: removed incoming edges to the intervention variable".to_string(),
        ),
    );

    Ok(CausalIntervention {
        id: mint_id(),
        graph_id: graph.id.clone(),
        variable: target.name.clone(),
        intervention_type: intervention_type.to_string(),
        predicted_effects,
        confidence,
        metadata,
        created_at: Utc::now(),
    })
}
