//! Pearl's graph surgery: `do(X)` severs every edge into X.
//!
//! The surgical graph is an independent deep copy of its source. Edges out
//! of X survive because X's influence on its descendants does not depend on
//! why X took its value.

use causeway_core::constants::{GRAPH_SURGERY_KEY, SURGICAL_ID_SUFFIX};
use causeway_core::models::{CausalGraph, SurgeryRecord};
use tracing::debug;

/// Build the surgical graph for an intervention on `variable_id`.
///
/// Pure: the source graph is only read. Links are kept iff `link.to != variable_id`.
pub fn perform_surgery(graph: &CausalGraph, variable_id: &str) -> CausalGraph {
    let (links, removed): (Vec<_>, Vec<_>) =
        graph.links.iter().partition(|link| link.to != variable_id);

    let record = SurgeryRecord::new(variable_id, removed.len());
    let mut metadata = graph.metadata.clone();
    metadata.insert(GRAPH_SURGERY_KEY.to_string(), record.to_value());

    debug!(
        graph_id = %graph.id,
        variable_id,
        removed = removed.len(),
        kept = links.len(),
        "graph surgery applied"
    );

    CausalGraph {
        id: format!("{}{SURGICAL_ID_SUFFIX}", graph.id),
        description: format!("{} (with graph surgery)", graph.description),
        variables: graph.variables.clone(),
        links: links.into_iter().cloned().collect(),
        metadata,
        created_at: graph.created_at,
    }
}
