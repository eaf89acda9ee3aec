//! Diagnostic logging for the `chessort` binary.
//!
//! Logs go to stderr so they never mix with the report on stdout. The filter
//! is read from `CHESSORT_LOG` (same syntax as `RUST_LOG`) and defaults to
//! `warn`.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "CHESSORT_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Build the filter from `CHESSORT_LOG`, falling back to `warn`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global stderr subscriber. Calling it twice is a no-op.
pub fn init_logging() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
