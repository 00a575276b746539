//! Test that generates TypeScript bindings from Rust types via ts-rs.
//!
//! Run with: cargo test -p causeway-core export_bindings
//! Generated files appear in causeway-core/bindings/*.ts

#[test]
fn export_bindings() {
    // The #[ts(export)] attribute emits the .ts files when `cargo test` runs.
    // This test only ensures every exported model is importable.
    use causeway_core::models::{
        CausalGraph, CausalIntervention, ClaimKind, CorrelationAssessment, Counterfactual,
        EffectDirection, EntityExport, GraphExport, GraphSummary, Link, LinkKind,
        PredictedEffect, RelationExport, SurgeryRecord, Variable, VariableKind,
    };

    let _ = std::any::type_name::<CausalGraph>();
    let _ = std::any::type_name::<Variable>();
    let _ = std::any::type_name::<VariableKind>();
    let _ = std::any::type_name::<Link>();
    let _ = std::any::type_name::<LinkKind>();
    let _ = std::any::type_name::<SurgeryRecord>();
    let _ = std::any::type_name::<PredictedEffect>();
    let _ = std::any::type_name::<EffectDirection>();
    let _ = std::any::type_name::<CausalIntervention>();
    let _ = std::any::type_name::<Counterfactual>();
    let _ = std::any::type_name::<ClaimKind>();
    let _ = std::any::type_name::<CorrelationAssessment>();
    let _ = std::any::type_name::<GraphExport>();
    let _ = std::any::type_name::<EntityExport>();
    let _ = std::any::type_name::<RelationExport>();
    let _ = std::any::type_name::<GraphSummary>();
}
