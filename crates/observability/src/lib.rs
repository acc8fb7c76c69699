//! Tracing/logging (shared setup).

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, subscriber setup).
pub mod tracing;

/// Diagnostic sink adapter forwarding to tracing.
pub mod sink;

pub use sink::TracingSink;
