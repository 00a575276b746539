//! Error taxonomy for the causal engine.
//!
//! Engine operations only ever fail with [`CausewayError::InvalidArgument`]
//! or [`CausewayError::NotFound`]. The remaining variants belong to
//! configuration loading and explicit serialization helpers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of resource a lookup failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Graph,
    Variable,
}

impl Resource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Graph => "graph",
            Self::Variable => "variable",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level error type for every Causeway crate.
#[derive(Debug, thiserror::Error)]
pub enum CausewayError {
    #[error("invalid argument `{field}`: {reason}")]
    InvalidArgument { field: String, reason: String },

    #[error("{resource} not found: {id}")]
    NotFound { resource: Resource, id: String },

    #[error("config error: {reason}")]
    ConfigError { reason: String },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl CausewayError {
    pub fn invalid_argument(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn graph_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            resource: Resource::Graph,
            id: id.into(),
        }
    }

    pub fn variable_not_found(reference: impl Into<String>) -> Self {
        Self::NotFound {
            resource: Resource::Variable,
            id: reference.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

pub type CausewayResult<T> = Result<T, CausewayError>;
