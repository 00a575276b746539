/// Default number of causal hops followed when tracing downstream effects.
pub const DEFAULT_MAX_PATH_LENGTH: usize = 3;

/// Hard ceiling on the configurable trace depth.
pub const MAX_TRACE_DEPTH_LIMIT: usize = 16;

/// Metadata key under which graph surgery records itself.
pub const GRAPH_SURGERY_KEY: &str = "graph_surgery";

/// Surgery type recorded on every surgically modified graph.
pub const SURGERY_TYPE: &str = "do-calculus";

/// Suffix appended to a graph id when it is derived by surgery.
pub const SURGICAL_ID_SUFFIX: &str = "-surgical";

/// Id prefixes minted by the graph store counter.
pub const GRAPH_ID_PREFIX: &str = "causal-graph";
pub const INTERVENTION_ID_PREFIX: &str = "intervention";
pub const COUNTERFACTUAL_ID_PREFIX: &str = "counterfactual";

/// Id prefixes used by the observation extractor (unique within one graph).
pub const VARIABLE_ID_PREFIX: &str = "var";
pub const LINK_ID_PREFIX: &str = "link";
