//! Diagnostic logging setup.
//!
//! Logs go to stderr so stdout carries only game output. The filter comes from
//! `ATAXX_LOG` using `tracing_subscriber::EnvFilter` syntax (for example
//! `ATAXX_LOG=ataxx_engine=debug`) and defaults to `warn`.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "ATAXX_LOG";
const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Calling it again is harmless.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
