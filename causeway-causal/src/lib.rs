//! # causeway-causal
//!
//! Causal graph engine: graph construction from observations, Pearl's graph
//! surgery, bounded downstream effect tracing, interventions, and
//! counterfactuals over a concurrency-safe in-memory store.
//!
//! ```
//! use causeway_causal::CausalEngine;
//!
//! let engine = CausalEngine::new();
//! let graph = engine
//!     .build_graph("smoking", &["Smoking causes cancer".to_string()])
//!     .unwrap();
//! let result = engine
//!     .simulate_intervention(&graph.id, "smoking", "increase")
//!     .unwrap();
//! assert_eq!(result.predicted_effects[0].variable, "cancer");
//! ```

pub mod advisor;
pub mod counterfactual;
pub mod engine;
pub mod export;
pub mod extraction;
pub mod graph;
pub mod intervention;
pub mod scoring;
pub mod store;
pub mod telemetry;
pub mod traversal;

pub use engine::CausalEngine;
pub use extraction::KeywordExtractor;
pub use store::GraphStore;
