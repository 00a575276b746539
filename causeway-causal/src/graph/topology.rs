//! Structural diagnostics over a causal graph using petgraph.
//! Cycles are reported, never rejected: the tracer's depth bound keeps
//! traversal finite on cyclic input.

use std::collections::HashMap;

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;

use causeway_core::models::{CausalGraph, GraphSummary};

/// petgraph view of a causal graph. Node weights are variable names.
struct TopologyView<'g> {
    graph: DiGraph<&'g str, ()>,
    nodes: Vec<NodeIndex>,
}

impl<'g> TopologyView<'g> {
    fn build(source: &'g CausalGraph) -> Self {
        let mut graph = DiGraph::with_capacity(source.variables.len(), source.links.len());
        let mut index: HashMap<&str, NodeIndex> = HashMap::with_capacity(source.variables.len());
        let mut nodes = Vec::with_capacity(source.variables.len());

        for variable in &source.variables {
            let idx = graph.add_node(variable.name.as_str());
            index.insert(variable.id.as_str(), idx);
            nodes.push(idx);
        }
        for link in &source.links {
            // Dangling references are skipped; they cannot form cycles.
            if let (Some(&from), Some(&to)) = (index.get(link.from.as_str()), index.get(link.to.as_str())) {
                graph.add_edge(from, to, ());
            }
        }

        Self { graph, nodes }
    }

    fn names_without(&self, direction: Direction) -> Vec<String> {
        self.nodes
            .iter()
            .filter(|&&idx| self.graph.neighbors_directed(idx, direction).next().is_none())
            .map(|&idx| self.graph[idx].to_string())
            .collect()
    }
}

/// Strongly connected components that form cycles, as sorted variable names.
/// A single variable counts only when it links to itself.
pub fn find_cycles(graph: &CausalGraph) -> Vec<Vec<String>> {
    let view = TopologyView::build(graph);
    let mut cycles: Vec<Vec<String>> = tarjan_scc(&view.graph)
        .into_iter()
        .filter(|scc| scc.len() > 1 || view.graph.contains_edge(scc[0], scc[0]))
        .map(|scc| {
            let mut names: Vec<String> = scc.iter().map(|&idx| view.graph[idx].to_string()).collect();
            names.sort();
            names
        })
        .collect();
    cycles.sort();
    cycles
}

/// Counts, roots, leaves, and cycles of a graph.
pub fn summarize(graph: &CausalGraph) -> GraphSummary {
    let view = TopologyView::build(graph);
    GraphSummary {
        graph_id: graph.id.clone(),
        variable_count: graph.variables.len(),
        link_count: graph.links.len(),
        roots: view.names_without(Direction::Incoming),
        leaves: view.names_without(Direction::Outgoing),
        cycles: find_cycles(graph),
    }
}
