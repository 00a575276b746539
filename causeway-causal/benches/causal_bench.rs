use std::collections::BTreeMap;

use criterion::{criterion_group, criterion_main, Criterion};

use causeway_causal::graph::{find_cycles, perform_surgery};
use causeway_causal::CausalEngine;
use causeway_core::models::{Link, LinkKind, Metadata, Variable, VariableKind};

/// ~1K edges: 200 variables, each linked to up to 5 forward neighbours.
fn build_1k_edge_dag(engine: &CausalEngine) -> String {
    let n = 200;
    let variables: Vec<Variable> = (0..n)
        .map(|i| Variable::new(format!("n{i}"), format!("node {i}"), VariableKind::Continuous))
        .collect();
    let mut links = Vec::new();
    for i in 0..n {
        for j in 1..=5 {
            let target = i + j;
            if target < n {
                links.push(Link {
                    id: format!("l{}", links.len()),
                    from: format!("n{i}"),
                    to: format!("n{target}"),
                    strength: 0.7,
                    kind: if j % 2 == 0 { LinkKind::Negative } else { LinkKind::Positive },
                    confidence: 0.8,
                    evidence: Vec::new(),
                    metadata: Metadata::new(),
                });
            }
        }
    }
    assert!(links.len() >= 900, "Should have ~1K edges, got {}", links.len());
    engine.register_graph("bench", variables, links).unwrap().id.clone()
}

fn bench_surgery(c: &mut Criterion) {
    let engine = CausalEngine::new();
    let id = build_1k_edge_dag(&engine);
    let graph = engine.get_graph(&id).unwrap();

    c.bench_function("surgery_1k_edges", |b| {
        b.iter(|| perform_surgery(&graph, "n100"));
    });
}

fn bench_intervention(c: &mut Criterion) {
    let engine = CausalEngine::new();
    let id = build_1k_edge_dag(&engine);

    c.bench_function("simulate_intervention_1k_edges", |b| {
        b.iter(|| engine.simulate_intervention(&id, "n0", "increase").unwrap());
    });
}

fn bench_counterfactual(c: &mut Criterion) {
    let engine = CausalEngine::new();
    let id = build_1k_edge_dag(&engine);
    let changes: BTreeMap<String, String> = [("node 0", "increase"), ("node 50", "decrease")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    c.bench_function("counterfactual_two_changes_1k_edges", |b| {
        b.iter(|| engine.generate_counterfactual(&id, "bench", &changes).unwrap());
    });
}

fn bench_cycle_detection(c: &mut Criterion) {
    let engine = CausalEngine::new();
    let id = build_1k_edge_dag(&engine);
    let graph = engine.get_graph(&id).unwrap();

    c.bench_function("find_cycles_1k_edges", |b| {
        b.iter(|| find_cycles(&graph));
    });
}

criterion_group!(
    benches,
    bench_surgery,
    bench_intervention,
    bench_counterfactual,
    bench_cycle_detection
);
criterion_main!(benches);
