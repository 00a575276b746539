//! Configuration for the causal engine, loaded from TOML.
//!
//! # Examples
//!
//! ```
//! use causeway_core::config::CausewayConfig;
//!
//! let config = CausewayConfig::from_toml("[trace]\nmax_path_length = 2\n").unwrap();
//! assert_eq!(config.trace.max_path_length, 2);
//! assert!((config.scoring.base_plausibility - 0.7).abs() < f64::EPSILON);
//! ```

pub mod defaults;
mod extraction_config;
mod observability_config;
mod scoring_config;
mod trace_config;

pub use extraction_config::ExtractionConfig;
pub use observability_config::ObservabilityConfig;
pub use scoring_config::ScoringConfig;
pub use trace_config::TraceConfig;

use serde::{Deserialize, Serialize};

use crate::constants::MAX_TRACE_DEPTH_LIMIT;
use crate::errors::{CausewayError, CausewayResult};

/// Root configuration. Every section falls back to its defaults when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CausewayConfig {
    pub trace: TraceConfig,
    pub scoring: ScoringConfig,
    pub extraction: ExtractionConfig,
    pub observability: ObservabilityConfig,
}

impl CausewayConfig {
    /// Parse a TOML document. Missing sections and fields keep their defaults.
    pub fn from_toml(source: &str) -> CausewayResult<Self> {
        let config: Self = toml::from_str(source).map_err(|e| CausewayError::ConfigError {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> CausewayResult<String> {
        toml::to_string(self).map_err(|e| CausewayError::ConfigError {
            reason: e.to_string(),
        })
    }

    /// Reject values the engine cannot honor.
    pub fn validate(&self) -> CausewayResult<()> {
        let depth = self.trace.max_path_length;
        if depth == 0 || depth > MAX_TRACE_DEPTH_LIMIT {
            return Err(CausewayError::ConfigError {
                reason: format!(
                    "trace.max_path_length must be within 1..={MAX_TRACE_DEPTH_LIMIT}, got {depth}"
                ),
            });
        }

        let unit_values = [
            ("scoring.no_effect_confidence", self.scoring.no_effect_confidence),
            ("scoring.base_plausibility", self.scoring.base_plausibility),
            ("scoring.change_count_penalty", self.scoring.change_count_penalty),
            ("scoring.outcome_count_penalty", self.scoring.outcome_count_penalty),
            ("extraction.default_strength", self.extraction.default_strength),
            ("extraction.default_confidence", self.extraction.default_confidence),
        ];
        for (name, value) in unit_values {
            if !(0.0..=1.0).contains(&value) {
                return Err(CausewayError::ConfigError {
                    reason: format!("{name} must be within [0, 1], got {value}"),
                });
            }
        }

        if self.extraction.min_variable_name_len == 0 {
            return Err(CausewayError::ConfigError {
                reason: "extraction.min_variable_name_len must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}
