use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::Metadata;

/// Sign of a causal influence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum LinkKind {
    Positive,
    Negative,
}

impl LinkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }

    /// Parse a lowercase label. Returns `None` for anything else.
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s {
            "positive" => Some(Self::Positive),
            "negative" => Some(Self::Negative),
            _ => None,
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directed causal edge `from -> to`.
///
/// `strength` is the effect magnitude and `confidence` the certainty that the
/// relationship is real. They are independent scalars in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Link {
    pub id: String,
    pub from: String,
    pub to: String,
    pub strength: f64,
    pub kind: LinkKind,
    pub confidence: f64,
    /// Source sentences supporting the link, in the order they were seen.
    #[serde(default)]
    pub evidence: Vec<String>,
    #[serde(default)]
    pub metadata: Metadata,
}

impl Link {
    /// Probability that a change propagates across this link.
    pub fn propagation_probability(&self) -> f64 {
        (self.confidence * self.strength).clamp(0.0, 1.0)
    }
}
