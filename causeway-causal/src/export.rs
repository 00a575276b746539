//! Flatten a causal graph into knowledge-graph entities and relations.

use causeway_core::models::{CausalGraph, EntityExport, GraphExport, RelationExport};

pub const VARIABLE_ENTITY_TYPE: &str = "causal_variable";

/// One entity per variable, one relation per link. Links whose endpoints
/// are not in the graph are skipped.
pub fn export_graph(graph: &CausalGraph) -> GraphExport {
    let entities = graph
        .variables
        .iter()
        .map(|v| EntityExport {
            name: v.name.clone(),
            entity_type: VARIABLE_ENTITY_TYPE.to_string(),
            observations: vec![
                format!("Type: {}", v.kind),
                format!("Observable: {}", v.observable),
            ],
        })
        .collect();

    let relations = graph
        .links
        .iter()
        .filter_map(|link| {
            Some(RelationExport {
                from: graph.variable(&link.from)?.name.clone(),
                to: graph.variable(&link.to)?.name.clone(),
                relation_type: format!("causes_{}", link.kind),
            })
        })
        .collect();

    GraphExport {
        graph_id: graph.id.clone(),
        entities,
        relations,
    }
}
