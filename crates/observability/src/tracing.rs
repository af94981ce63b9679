//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber: JSON lines on stderr, filtered via
/// `RUST_LOG`.
///
/// Logs go to stderr so that stdout stays reserved for statement text.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("playbill=info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .json()
        .with_target(false)
        .try_init();
}
