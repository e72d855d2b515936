//! Diagnostic logging to stderr.
//!
//! Game output goes to the `out` stream; tracing events (ledger loads and
//! saves, reshuffles, skipped entries) go to stderr. `RUST_LOG` wins when it
//! is set, otherwise the configured `log_level` applies.

use tracing_subscriber::EnvFilter;

/// Used when the configured level is not a valid filter directive.
const FALLBACK_DIRECTIVE: &str = "warn";

pub fn build_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new(FALLBACK_DIRECTIVE))
}

/// Installs the global subscriber. A second call is a no-op.
pub fn init_logging(log_level: &str) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(build_filter(log_level))
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::debug!("global subscriber already installed");
    }
}
