use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A causal graph flattened into knowledge-graph entities and relations.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GraphExport {
    pub graph_id: String,
    pub entities: Vec<EntityExport>,
    pub relations: Vec<RelationExport>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EntityExport {
    pub name: String,
    pub entity_type: String,
    pub observations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RelationExport {
    pub from: String,
    pub to: String,
    pub relation_type: String,
}
