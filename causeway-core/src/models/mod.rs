//! Plain-data model shared by the engine and its hosts.

pub mod claim;
pub mod counterfactual;
pub mod effect;
pub mod graph;
pub mod graph_export;
pub mod graph_summary;
pub mod intervention;
pub mod link;
pub mod variable;

use std::collections::BTreeMap;

pub use claim::{ClaimKind, CorrelationAssessment};
pub use counterfactual::Counterfactual;
pub use effect::{EffectDirection, PredictedEffect};
pub use graph::{CausalGraph, SurgeryRecord};
pub use graph_export::{EntityExport, GraphExport, RelationExport};
pub use graph_summary::GraphSummary;
pub use intervention::CausalIntervention;
pub use link::{Link, LinkKind};
pub use variable::{Variable, VariableKind};

/// Free-form metadata attached to graphs, variables, links, and results.
pub type Metadata = BTreeMap<String, serde_json::Value>;
