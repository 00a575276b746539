use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{Link, Metadata, Variable};
use crate::constants::{GRAPH_SURGERY_KEY, SURGERY_TYPE};

/// A directed graph of causal variables.
///
/// Invariant: every link's `from` and `to` names a variable id present in
/// `variables`. Acyclicity is assumed but not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CausalGraph {
    pub id: String,
    pub description: String,
    pub variables: Vec<Variable>,
    pub links: Vec<Link>,
    #[serde(default)]
    pub metadata: Metadata,
    pub created_at: DateTime<Utc>,
}

impl CausalGraph {
    /// Look a variable up by exact id.
    pub fn variable(&self, id: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.id == id)
    }

    /// Resolve a caller-supplied reference: an exact id wins, otherwise the
    /// first variable whose name matches case-insensitively.
    pub fn resolve_variable(&self, reference: &str) -> Option<&Variable> {
        if let Some(v) = self.variable(reference) {
            return Some(v);
        }
        let wanted = reference.trim().to_lowercase();
        self.variables
            .iter()
            .find(|v| v.name.to_lowercase() == wanted)
    }

    /// Links leaving `variable_id`, in graph order.
    pub fn outgoing<'a>(&'a self, variable_id: &'a str) -> impl Iterator<Item = &'a Link> + 'a {
        self.links.iter().filter(move |l| l.from == variable_id)
    }

    /// Links entering `variable_id`, in graph order.
    pub fn incoming<'a>(&'a self, variable_id: &'a str) -> impl Iterator<Item = &'a Link> + 'a {
        self.links.iter().filter(move |l| l.to == variable_id)
    }

    /// Name of the variable with the given id, falling back to the id itself.
    pub fn variable_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.variable(id).map(|v| v.name.as_str()).unwrap_or(id)
    }

    /// Whether every link endpoint references a variable of this graph.
    pub fn references_are_consistent(&self) -> bool {
        self.links
            .iter()
            .all(|l| self.variable(&l.from).is_some() && self.variable(&l.to).is_some())
    }

    /// The surgery record, if this graph was produced by graph surgery.
    pub fn surgery_record(&self) -> Option<SurgeryRecord> {
        self.metadata
            .get(GRAPH_SURGERY_KEY)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }
}

/// Metadata attached to a graph produced by `do(X)` surgery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SurgeryRecord {
    pub intervention_variable: String,
    pub removed_edge_count: usize,
    pub surgery_type: String,
    pub description: String,
}

impl SurgeryRecord {
    pub fn new(intervention_variable: &str, removed_edge_count: usize) -> Self {
        Self {
            intervention_variable: intervention_variable.to_string(),
            removed_edge_count,
            surgery_type: SURGERY_TYPE.to_string(),
            description: format!(
                "Removed {removed_edge_count} incoming edges to variable {intervention_variable}"
            ),
        }
    }

    pub fn to_value(&self) -> serde_json::Value {
        serde_json::json!({
            "intervention_variable": self.intervention_variable,
            "removed_edge_count": self.removed_edge_count,
            "surgery_type": self.surgery_type,
            "description": self.description,
        })
    }
}
