use serde::{Deserialize, Serialize};

use super::defaults;

/// Effect tracer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Deepest path length a predicted effect may have. Default: 3.
    pub max_path_length: usize,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            max_path_length: defaults::DEFAULT_TRACE_MAX_PATH_LENGTH,
        }
    }
}
