//! Forward traversal: "what does forcing this variable change?". Follows
//! outgoing edges only, so it agrees with the surgery that preceded it.
//!
//! Walks depth-first with an explicit stack. Each frame keeps its own visited
//! set, so one node never walks the same target twice, but a variable reached
//! through two different branches (a diamond) is reported once per path.

use std::collections::{HashMap, HashSet};

use causeway_core::config::TraceConfig;
use causeway_core::models::{CausalGraph, EffectDirection, Link, PredictedEffect, Variable};

struct Frame<'g> {
    node: &'g str,
    driver: EffectDirection,
    depth: usize,
    cursor: usize,
    visited: HashSet<&'g str>,
}

impl<'g> Frame<'g> {
    fn new(node: &'g str, driver: EffectDirection, depth: usize) -> Self {
        Self {
            node,
            driver,
            depth,
            cursor: 0,
            visited: HashSet::new(),
        }
    }

    /// Advance to the next outgoing link whose target this frame has not walked.
    fn next_link(&mut self, adjacency: &HashMap<&'g str, Vec<&'g Link>>) -> Option<&'g Link> {
        let edges = adjacency.get(self.node)?;
        while let Some(&link) = edges.get(self.cursor) {
            self.cursor += 1;
            if self.visited.insert(link.to.as_str()) {
                return Some(link);
            }
        }
        None
    }
}

/// Trace effects of `intervention_type` applied to `start_variable_id`,
/// starting at path length 1.
pub fn trace(
    graph: &CausalGraph,
    start_variable_id: &str,
    intervention_type: &str,
    config: &TraceConfig,
) -> Vec<PredictedEffect> {
    trace_from_depth(graph, start_variable_id, intervention_type, 1, config)
}

/// Trace effects with the first hop reported at `path_length`. Hops deeper
/// than `config.max_path_length` are never emitted.
pub fn trace_from_depth(
    graph: &CausalGraph,
    start_variable_id: &str,
    intervention_type: &str,
    path_length: usize,
    config: &TraceConfig,
) -> Vec<PredictedEffect> {
    let max_depth = config.max_path_length.max(1);
    let first_depth = path_length.max(1);
    let mut effects = Vec::new();
    if first_depth > max_depth {
        return effects;
    }

    let mut adjacency: HashMap<&str, Vec<&Link>> = HashMap::new();
    for link in &graph.links {
        adjacency.entry(link.from.as_str()).or_default().push(link);
    }
    let variables: HashMap<&str, &Variable> =
        graph.variables.iter().map(|v| (v.id.as_str(), v)).collect();

    let mut stack = vec![Frame::new(
        start_variable_id,
        EffectDirection::from_intervention(intervention_type),
        first_depth,
    )];

    while let Some(frame) = stack.last_mut() {
        let Some(link) = frame.next_link(&adjacency) else {
            stack.pop();
            continue;
        };
        let Some(target) = variables.get(link.to.as_str()) else {
            continue;
        };

        let depth = frame.depth;
        let direction = frame.driver.through(link.kind);
        let source_name = variables
            .get(frame.node)
            .map(|v| v.name.as_str())
            .unwrap_or(frame.node);

        effects.push(PredictedEffect {
            variable: target.name.clone(),
            effect: direction,
            magnitude: link.strength,
            probability: link.propagation_probability(),
            explanation: explain(link, source_name, depth),
            path_length: depth,
        });

        // The downstream effect becomes the driver of the next hop.
        if depth < max_depth {
            stack.push(Frame::new(link.to.as_str(), direction, depth + 1));
        }
    }

    effects
}

fn explain(link: &Link, source_name: &str, depth: usize) -> String {
    if depth == 1 {
        format!("Via {} causal link from intervention variable {source_name}", link.kind)
    } else {
        format!(
            "Via {} causal link from {source_name}, {depth} steps downstream of the intervention",
            link.kind
        )
    }
}
