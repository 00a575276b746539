//! Property tests for causeway-causal: surgery and tracing invariants over
//! random (possibly cyclic) graphs.

use std::collections::BTreeMap;

use chrono::Utc;
use proptest::prelude::*;

use causeway_causal::counterfactual;
use causeway_causal::graph::perform_surgery;
use causeway_causal::intervention;
use causeway_causal::traversal::trace;
use causeway_core::config::{CausewayConfig, TraceConfig};
use causeway_core::models::{CausalGraph, Link, LinkKind, Metadata, Variable, VariableKind};

type EdgeSpec = (usize, usize, f64, f64, bool);

/// Build a graph with `n` variables. Edges may form cycles and self-loops.
fn build_random_graph(n: usize, edges: &[EdgeSpec]) -> CausalGraph {
    let variables = (0..n)
        .map(|i| Variable::new(format!("n{i}"), format!("node {i}"), VariableKind::Continuous))
        .collect();
    let links = edges
        .iter()
        .enumerate()
        .map(|(i, &(from, to, strength, confidence, positive))| Link {
            id: format!("l{i}"),
            from: format!("n{}", from % n),
            to: format!("n{}", to % n),
            strength,
            kind: if positive { LinkKind::Positive } else { LinkKind::Negative },
            confidence,
            evidence: Vec::new(),
            metadata: Metadata::new(),
        })
        .collect();
    CausalGraph {
        id: "g".to_string(),
        description: "random".to_string(),
        variables,
        links,
        metadata: Metadata::new(),
        created_at: Utc::now(),
    }
}

// Random edges for a graph of size n.
fn edge_strategy(n: usize) -> impl Strategy<Value = Vec<EdgeSpec>> {
    prop::collection::vec((0..n, 0..n, 0.0_f64..=1.0, 0.0_f64..=1.0, any::<bool>()), 0..n * 3)
}

// =============================================================================
// Surgery keeps exactly the links not pointing at the target
// =============================================================================
proptest! {
    #[test]
    fn surgery_is_a_filter_on_incoming_edges(
        target in 0_usize..12,
        edges in edge_strategy(12)
    ) {
        let graph = build_random_graph(12, &edges);
        let target = format!("n{target}");
        let surgical = perform_surgery(&graph, &target);

        let expected: Vec<&Link> = graph.links.iter().filter(|l| l.to != target).collect();
        let actual: Vec<&Link> = surgical.links.iter().collect();
        prop_assert_eq!(actual, expected);

        let record = surgical.surgery_record().unwrap();
        prop_assert_eq!(record.removed_edge_count, graph.links.len() - surgical.links.len());
        prop_assert!(surgical.references_are_consistent());
    }
}

// =============================================================================
// Surgery never touches its source, and edges out of the target survive
// =============================================================================
proptest! {
    #[test]
    fn surgery_is_non_destructive_and_keeps_outgoing(
        target in 0_usize..10,
        edges in edge_strategy(10)
    ) {
        let graph = build_random_graph(10, &edges);
        let before = graph.clone();
        let target = format!("n{target}");

        let surgical = perform_surgery(&graph, &target);

        prop_assert_eq!(&graph, &before);
        for link in graph.links.iter().filter(|l| l.from == target && l.to != target) {
            prop_assert!(surgical.links.contains(link), "outgoing link {} was dropped", link.id);
        }
        prop_assert_eq!(&surgical.variables, &graph.variables);
    }
}

// =============================================================================
// Path length never exceeds the configured bound
// =============================================================================
proptest! {
    #[test]
    fn trace_depth_is_bounded(
        max_path_length in 1_usize..6,
        start in 0_usize..10,
        edges in edge_strategy(10)
    ) {
        let graph = build_random_graph(10, &edges);
        let config = TraceConfig { max_path_length };

        let effects = trace(&graph, &format!("n{start}"), "increase", &config);
        for effect in &effects {
            prop_assert!(effect.path_length >= 1);
            prop_assert!(effect.path_length <= max_path_length);
            prop_assert!((0.0..=1.0).contains(&effect.probability));
        }
    }
}

// =============================================================================
// Confidence and plausibility stay in [0, 1]
// =============================================================================
proptest! {
    #[test]
    fn scores_are_bounded(
        target in 0_usize..8,
        directive in prop::sample::select(vec!["increase", "decrease", "change", "set to 3"]),
        change_targets in prop::collection::btree_set(0_usize..8, 1..6),
        edges in edge_strategy(8)
    ) {
        let graph = build_random_graph(8, &edges);
        let config = CausewayConfig::default();

        let result = intervention::simulate(
            &graph,
            &format!("n{target}"),
            directive,
            &config,
            || "intervention-1".to_string(),
        )
        .unwrap();
        prop_assert!((0.0..=1.0).contains(&result.confidence));
        if result.predicted_effects.is_empty() {
            prop_assert_eq!(result.confidence, 0.5);
        }

        let changes: BTreeMap<String, String> = change_targets
            .into_iter()
            .map(|i| (format!("node {i}"), directive.to_string()))
            .collect();
        let cf = counterfactual::generate(&graph, "random", &changes, &config, || {
            "counterfactual-1".to_string()
        })
        .unwrap();
        prop_assert!((0.0..=1.0).contains(&cf.plausibility));
    }
}
