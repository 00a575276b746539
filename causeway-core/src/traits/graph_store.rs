use std::sync::Arc;

use crate::errors::CausewayResult;
use crate::models::{CausalGraph, Link, Variable};

/// Registry of immutable causal graphs plus the id counter shared by every
/// result the engine mints.
pub trait IGraphStore: Send + Sync {
    /// Register a new graph under a freshly minted id.
    fn create(
        &self,
        description: &str,
        variables: Vec<Variable>,
        links: Vec<Link>,
    ) -> Arc<CausalGraph>;

    /// Fetch a registered graph. Fails with `NotFound` for unknown ids.
    fn get(&self, graph_id: &str) -> CausewayResult<Arc<CausalGraph>>;

    /// Mint a unique `<prefix>-<n>` id from the shared counter.
    fn next_id(&self, prefix: &str) -> String;

    /// Number of registered graphs.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
