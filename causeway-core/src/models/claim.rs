use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How a free-text observation phrases a relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ClaimKind {
    Causal,
    Correlational,
    Unclear,
}

impl ClaimKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Causal => "causal",
            Self::Correlational => "correlational",
            Self::Unclear => "unclear",
        }
    }
}

/// Output of the correlation-vs-causation advisor.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CorrelationAssessment {
    pub observation: String,
    pub kind: ClaimKind,
    pub analysis: String,
}
