//! `CausalEngine`: the public entry point over the store, the extractor,
//! surgery, tracing and scoring.
//!
//! Every operation is synchronous and pure apart from registering new graphs.
//! The engine is `Send + Sync`; share it across threads behind an `Arc`.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use tracing::{info, info_span, warn};

use causeway_core::config::CausewayConfig;
use causeway_core::constants::{COUNTERFACTUAL_ID_PREFIX, INTERVENTION_ID_PREFIX};
use causeway_core::errors::{CausewayError, CausewayResult};
use causeway_core::models::{
    CausalGraph, CausalIntervention, CorrelationAssessment, Counterfactual, GraphExport,
    GraphSummary, Link, Variable,
};
use causeway_core::traits::{IGraphStore, IObservationExtractor};

use crate::extraction::KeywordExtractor;
use crate::graph::{find_cycles, perform_surgery, summarize};
use crate::store::GraphStore;
use crate::{advisor, counterfactual, export, intervention};

pub struct CausalEngine {
    store: Arc<dyn IGraphStore>,
    extractor: Box<dyn IObservationExtractor>,
    config: CausewayConfig,
}

impl CausalEngine {
    /// Engine with default config, an in-memory store, and the keyword extractor.
    pub fn new() -> Self {
        let config = CausewayConfig::default();
        Self {
            store: Arc::new(GraphStore::new()),
            extractor: Box::new(KeywordExtractor::with_config(config.extraction.clone())),
            config,
        }
    }

    /// Engine with a validated config.
    pub fn with_config(config: CausewayConfig) -> CausewayResult<Self> {
        config.validate()?;
        Ok(Self {
            store: Arc::new(GraphStore::new()),
            extractor: Box::new(KeywordExtractor::with_config(config.extraction.clone())),
            config,
        })
    }

    /// Replace the observation extractor.
    pub fn with_extractor(mut self, extractor: impl IObservationExtractor + 'static) -> Self {
        self.extractor = Box::new(extractor);
        self
    }

    /// Replace the graph store, e.g. to share one store between engines.
    pub fn with_store(mut self, store: Arc<dyn IGraphStore>) -> Self {
        self.store = store;
        self
    }

    pub fn config(&self) -> &CausewayConfig {
        &self.config
    }

    pub fn graph_count(&self) -> usize {
        self.store.len()
    }

    /// Build a graph from natural-language observations and register it.
    ///
    /// Extraction is best effort: a graph with no variables is a valid result.
    pub fn build_graph(
        &self,
        description: &str,
        observations: &[String],
    ) -> CausewayResult<Arc<CausalGraph>> {
        let span = info_span!(
            "causeway.build_graph",
            observations = observations.len(),
            graph_id = tracing::field::Empty
        );
        let _entered = span.enter();

        require_description(description)?;
        if observations.is_empty() {
            return Err(CausewayError::invalid_argument(
                "observations",
                "at least one observation required",
            ));
        }

        let extraction = self.extractor.extract(observations);
        let links = drop_dangling_links(&extraction.variables, extraction.links);
        let graph = self.register(description, extraction.variables, links);
        span.record("graph_id", graph.id.as_str());
        Ok(graph)
    }

    /// Register a graph with caller-supplied structure.
    ///
    /// Fails with `InvalidArgument` on an empty description, duplicate
    /// variable ids, or a link endpoint that names no variable.
    pub fn register_graph(
        &self,
        description: &str,
        variables: Vec<Variable>,
        links: Vec<Link>,
    ) -> CausewayResult<Arc<CausalGraph>> {
        let _span = info_span!("causeway.register_graph", variables = variables.len()).entered();

        require_description(description)?;
        let mut ids = HashSet::with_capacity(variables.len());
        for variable in &variables {
            if !ids.insert(variable.id.as_str()) {
                return Err(CausewayError::invalid_argument(
                    "variables",
                    format!("duplicate variable id {}", variable.id),
                ));
            }
        }
        if let Some(link) = links
            .iter()
            .find(|l| !ids.contains(l.from.as_str()) || !ids.contains(l.to.as_str()))
        {
            return Err(CausewayError::invalid_argument(
                "links",
                format!("link {} references an unknown variable", link.id),
            ));
        }

        Ok(self.register(description, variables, links))
    }

    fn register(
        &self,
        description: &str,
        variables: Vec<Variable>,
        links: Vec<Link>,
    ) -> Arc<CausalGraph> {
        let graph = self.store.create(description, variables, links);

        let cycles = find_cycles(&graph);
        if !cycles.is_empty() {
            warn!(
                graph_id = %graph.id,
                cycles = cycles.len(),
                "causal graph contains cycles; effect traces stay depth-bounded"
            );
        }
        info!(
            graph_id = %graph.id,
            variables = graph.variables.len(),
            links = graph.links.len(),
            "causal graph registered"
        );
        graph
    }

    pub fn get_graph(&self, graph_id: &str) -> CausewayResult<Arc<CausalGraph>> {
        let _span = info_span!("causeway.get_graph", graph_id = %graph_id).entered();
        self.store.get(graph_id)
    }

    /// The surgical graph for `do(variable_ref)`. Not registered in the store.
    pub fn surgery(&self, graph_id: &str, variable_ref: &str) -> CausewayResult<CausalGraph> {
        let _span = info_span!("causeway.surgery", graph_id = %graph_id).entered();

        let graph = self.store.get(graph_id)?;
        let variable = graph
            .resolve_variable(variable_ref)
            .ok_or_else(|| CausewayError::variable_not_found(variable_ref))?;
        Ok(perform_surgery(&graph, &variable.id))
    }

    /// Predict the downstream effects of forcing `variable_ref`.
    pub fn simulate_intervention(
        &self,
        graph_id: &str,
        variable_ref: &str,
        intervention_type: &str,
    ) -> CausewayResult<CausalIntervention> {
        let _span = info_span!(
            "causeway.simulate_intervention",
            graph_id = %graph_id,
            intervention_type
        )
        .entered();

        let graph = self.store.get(graph_id)?;
        let result = intervention::simulate(
            &graph,
            variable_ref,
            intervention_type,
            &self.config,
            || self.store.next_id(INTERVENTION_ID_PREFIX),
        )?;

        info!(
            intervention_id = %result.id,
            effects = result.predicted_effects.len(),
            confidence = result.confidence,
            "intervention simulated"
        );
        Ok(result)
    }

    /// Evaluate a multi-variable "what if" against the stored graph.
    pub fn generate_counterfactual(
        &self,
        graph_id: &str,
        scenario: &str,
        changes: &BTreeMap<String, String>,
    ) -> CausewayResult<Counterfactual> {
        let _span = info_span!(
            "causeway.generate_counterfactual",
            graph_id = %graph_id,
            changes = changes.len()
        )
        .entered();

        let graph = self.store.get(graph_id)?;
        let result = counterfactual::generate(&graph, scenario, changes, &self.config, || {
            self.store.next_id(COUNTERFACTUAL_ID_PREFIX)
        })?;

        info!(
            counterfactual_id = %result.id,
            outcomes = result.outcomes.len(),
            plausibility = result.plausibility,
            "counterfactual generated"
        );
        Ok(result)
    }

    pub fn analyze_correlation(&self, observation: &str) -> CausewayResult<CorrelationAssessment> {
        let _span = info_span!("causeway.analyze_correlation").entered();
        advisor::analyze(observation)
    }

    pub fn summarize(&self, graph_id: &str) -> CausewayResult<GraphSummary> {
        let _span = info_span!("causeway.summarize", graph_id = %graph_id).entered();
        Ok(summarize(&*self.store.get(graph_id)?))
    }

    /// Knowledge-graph entities and relations for a stored graph.
    pub fn export(&self, graph_id: &str) -> CausewayResult<GraphExport> {
        let _span = info_span!("causeway.export", graph_id = %graph_id).entered();
        Ok(export::export_graph(&*self.store.get(graph_id)?))
    }
}

impl Default for CausalEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn require_description(description: &str) -> CausewayResult<()> {
    if description.trim().is_empty() {
        return Err(CausewayError::invalid_argument(
            "description",
            "description cannot be empty",
        ));
    }
    Ok(())
}

fn drop_dangling_links(variables: &[Variable], links: Vec<Link>) -> Vec<Link> {
    let ids: HashSet<&str> = variables.iter().map(|v| v.id.as_str()).collect();
    let before = links.len();
    let kept: Vec<Link> = links
        .into_iter()
        .filter(|l| ids.contains(l.from.as_str()) && ids.contains(l.to.as_str()))
        .collect();
    if kept.len() < before {
        warn!(dropped = before - kept.len(), "extractor produced links to unknown variables");
    }
    kept
}
