use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Structural overview of a causal graph.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GraphSummary {
    pub graph_id: String,
    pub variable_count: usize,
    pub link_count: usize,
    /// Names of variables with no incoming links.
    pub roots: Vec<String>,
    /// Names of variables with no outgoing links.
    pub leaves: Vec<String>,
    /// Each cycle as the variable names of one strongly connected component.
    pub cycles: Vec<Vec<String>>,
}

impl GraphSummary {
    pub fn is_acyclic(&self) -> bool {
        self.cycles.is_empty()
    }
}
