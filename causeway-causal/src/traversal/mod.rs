//! Downstream effect tracing over (surgically modified) causal graphs.

pub mod direction;
pub mod trace_effects;

pub use direction::{effect_direction, effect_direction_from_labels};
pub use trace_effects::{trace, trace_from_depth};
