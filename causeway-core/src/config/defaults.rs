//! Default values shared by the config sections.

use crate::constants::DEFAULT_MAX_PATH_LENGTH;

// Trace
pub const DEFAULT_TRACE_MAX_PATH_LENGTH: usize = DEFAULT_MAX_PATH_LENGTH;

// Scoring
pub const DEFAULT_NO_EFFECT_CONFIDENCE: f64 = 0.5;
pub const DEFAULT_BASE_PLAUSIBILITY: f64 = 0.7;
pub const DEFAULT_CHANGE_COUNT_THRESHOLD: usize = 3;
pub const DEFAULT_CHANGE_COUNT_PENALTY: f64 = 0.8;
pub const DEFAULT_OUTCOME_COUNT_THRESHOLD: usize = 5;
pub const DEFAULT_OUTCOME_COUNT_PENALTY: f64 = 0.9;

// Extraction
pub const DEFAULT_MIN_VARIABLE_NAME_LEN: usize = 3;
pub const DEFAULT_LINK_STRENGTH: f64 = 0.7;
pub const DEFAULT_LINK_CONFIDENCE: f64 = 0.7;

// Observability
pub const DEFAULT_LOG_LEVEL: &str = "info";
