use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::LinkKind;

/// Direction of a predicted change on a downstream variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum EffectDirection {
    Increase,
    Decrease,
    Change,
}

impl EffectDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Increase => "increase",
            Self::Decrease => "decrease",
            Self::Change => "change",
        }
    }

    /// Interpret a free-form intervention type. Only the exact labels
    /// "increase" and "decrease" carry a sign; everything else is `Change`.
    pub fn from_intervention(intervention_type: &str) -> Self {
        match intervention_type {
            "increase" => Self::Increase,
            "decrease" => Self::Decrease,
            _ => Self::Change,
        }
    }

    /// The direction this change induces across a link of the given sign.
    pub fn through(self, kind: LinkKind) -> Self {
        match (self, kind) {
            (Self::Increase, LinkKind::Positive) => Self::Increase,
            (Self::Increase, LinkKind::Negative) => Self::Decrease,
            (Self::Decrease, LinkKind::Positive) => Self::Decrease,
            (Self::Decrease, LinkKind::Negative) => Self::Increase,
            (Self::Change, _) => Self::Change,
        }
    }
}

impl fmt::Display for EffectDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One predicted downstream consequence of an intervention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PredictedEffect {
    /// Name of the affected variable.
    pub variable: String,
    pub effect: EffectDirection,
    pub magnitude: f64,
    pub probability: f64,
    pub explanation: String,
    /// Number of causal hops from the intervened variable (>= 1).
    pub path_length: usize,
}
