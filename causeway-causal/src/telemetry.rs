//! Tracing subscriber setup.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use causeway_core::config::ObservabilityConfig;

/// Environment variable holding filter directives, e.g.
/// `CAUSEWAY_LOG=causeway_causal=debug`. Overrides `log_level`.
pub const LOG_ENV_VAR: &str = "CAUSEWAY_LOG";

/// Install the global subscriber described by `config`.
///
/// Returns `false` when a global subscriber is already installed (by an
/// earlier call or by the host process). Safe to call more than once.
pub fn init_tracing(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let json = config.json_logs.then(|| {
        fmt::layer()
            .json()
            .with_target(true)
            .with_thread_ids(true)
    });
    let text = (!config.json_logs).then(|| {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(text)
        .try_init()
        .is_ok()
}
