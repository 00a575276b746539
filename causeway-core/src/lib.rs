//! # causeway-core
//!
//! Foundation crate for the Causeway causal reasoning engine.
//! Defines the graph data model, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CausewayConfig;
pub use errors::{CausewayError, CausewayResult};
pub use models::{
    CausalGraph, CausalIntervention, Counterfactual, EffectDirection, Link, LinkKind, Metadata,
    PredictedEffect, SurgeryRecord, Variable, VariableKind,
};
