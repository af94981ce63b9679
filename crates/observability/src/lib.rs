//! Shared tracing/logging setup for binaries embedding the billing engine.

pub mod tracing;

/// Initialize process-wide logging.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    tracing::init();
}
