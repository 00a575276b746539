//! In-memory registry of immutable causal graphs.
//!
//! One reader-writer lock covers both the id -> graph map and the monotonic
//! counter, so id allocation and registration are atomic with respect to
//! other writers while readers never block each other.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use tracing::debug;

use causeway_core::constants::GRAPH_ID_PREFIX;
use causeway_core::errors::{CausewayError, CausewayResult};
use causeway_core::models::{CausalGraph, Link, Metadata, Variable};
use causeway_core::traits::IGraphStore;

#[derive(Debug, Default)]
struct StoreInner {
    graphs: HashMap<String, Arc<CausalGraph>>,
    counter: u64,
}

impl StoreInner {
    fn mint(&mut self, prefix: &str) -> String {
        self.counter += 1;
        format!("{prefix}-{}", self.counter)
    }
}

/// Thread-safe graph registry. Graphs are handed out as `Arc`s and are never
/// modified after registration.
#[derive(Debug, Default)]
pub struct GraphStore {
    inner: RwLock<StoreInner>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Stored graphs are immutable, so a poisoned lock still guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, StoreInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Ids of every registered graph, sorted.
    pub fn graph_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.read().graphs.keys().cloned().collect();
        ids.sort();
        ids
    }
}

impl IGraphStore for GraphStore {
    fn create(
        &self,
        description: &str,
        variables: Vec<Variable>,
        links: Vec<Link>,
    ) -> Arc<CausalGraph> {
        let mut inner = self.write();
        let id = inner.mint(GRAPH_ID_PREFIX);
        let graph = Arc::new(CausalGraph {
            id: id.clone(),
            description: description.to_string(),
            variables,
            links,
            metadata: Metadata::new(),
            created_at: Utc::now(),
        });
        inner.graphs.insert(id, Arc::clone(&graph));
        debug!(graph_id = %graph.id, total = inner.graphs.len(), "graph registered");
        graph
    }

    fn get(&self, graph_id: &str) -> CausewayResult<Arc<CausalGraph>> {
        self.read()
            .graphs
            .get(graph_id)
            .cloned()
            .ok_or_else(|| CausewayError::graph_not_found(graph_id))
    }

    fn next_id(&self, prefix: &str) -> String {
        self.write().mint(prefix)
    }

    fn len(&self) -> usize {
        self.read().graphs.len()
    }
}
