use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::Metadata;

/// Value domain of a causal variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum VariableKind {
    Binary,
    Continuous,
    Categorical,
}

impl VariableKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::Continuous => "continuous",
            Self::Categorical => "categorical",
        }
    }
}

impl fmt::Display for VariableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node in a causal graph. Identity is `id`; `name` is the human label
/// used to look the variable up in intervention and counterfactual requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Variable {
    pub id: String,
    pub name: String,
    pub kind: VariableKind,
    pub observable: bool,
    #[serde(default)]
    pub metadata: Metadata,
}

impl Variable {
    /// An observable variable with empty metadata.
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: VariableKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            observable: true,
            metadata: Metadata::new(),
        }
    }
}
