//! Tracing subscriber setup.
//!
//! Spans and events throughout the crate go through `tracing`; this module
//! wires a subscriber that filters on the configured level and writes to
//! stderr, keeping stdout free for listing output and exports.

use crate::Config;
use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber from configuration.
///
/// The filter directive comes from `config.trace_level` (default `"info"`);
/// any `RUST_LOG`-style directive string works, e.g. `"debug"` or
/// `"jobflow=trace"`. Observability is optional: if a subscriber is already
/// installed or initialization fails, this is a no-op.
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .try_init();
}
