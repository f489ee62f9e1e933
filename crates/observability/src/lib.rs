//! Tracing and logging (shared setup).

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(&tracing::TracingConfig::from_env());
}

/// Tracing configuration (filters, output format).
pub mod tracing;

/// Browser console writer used by the `wasm32` subscriber.
pub mod console;

pub use self::tracing::{LogFormat, TracingConfig};
