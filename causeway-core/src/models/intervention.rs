use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{Metadata, PredictedEffect};

/// Result of simulating `do(variable = intervention_type)` on a stored graph.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CausalIntervention {
    pub id: String,
    pub graph_id: String,
    /// Name of the intervened variable.
    pub variable: String,
    pub intervention_type: String,
    pub predicted_effects: Vec<PredictedEffect>,
    /// Overall confidence in [0, 1].
    pub confidence: f64,
    #[serde(default)]
    pub metadata: Metadata,
    pub created_at: DateTime<Utc>,
}
