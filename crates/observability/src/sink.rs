//! `DiagnosticSink` adapter that forwards to `tracing`.

use stockroom_core::{DiagnosticSink, Level};

/// Forwards store diagnostics into the process-wide tracing subscriber at
/// the matching level, so they show up alongside everything else the
/// process logs.
#[derive(Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, level: Level, message: &str) {
        match level {
            Level::Info => tracing::info!("{message}"),
            Level::Warning => tracing::warn!("{message}"),
            Level::Error => tracing::error!("{message}"),
        }
    }
}
