use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{EffectDirection, Metadata};

/// A "what if" scenario evaluated against a stored graph.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Counterfactual {
    pub id: String,
    pub graph_id: String,
    pub scenario: String,
    /// Variable name -> directive ("increase", "decrease", or any other label).
    pub changes: BTreeMap<String, String>,
    /// Variable name -> predicted effect on that variable.
    pub outcomes: BTreeMap<String, EffectDirection>,
    /// Plausibility in [0, 1].
    pub plausibility: f64,
    #[serde(default)]
    pub metadata: Metadata,
    pub created_at: DateTime<Utc>,
}
