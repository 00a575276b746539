use serde::{Deserialize, Serialize};

use super::defaults;

/// Keyword extractor configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Cleaned candidate names shorter than this are discarded. Default: 3.
    pub min_variable_name_len: usize,
    /// Link strength when no intensity word is present. Default: 0.7.
    pub default_strength: f64,
    /// Link confidence when no certainty word is present. Default: 0.7.
    pub default_confidence: f64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            min_variable_name_len: defaults::DEFAULT_MIN_VARIABLE_NAME_LEN,
            default_strength: defaults::DEFAULT_LINK_STRENGTH,
            default_confidence: defaults::DEFAULT_LINK_CONFIDENCE,
        }
    }
}
