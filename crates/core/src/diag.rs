//! Diagnostic sink: leveled, human-readable operation outcomes.
//!
//! The store reports what happened (additions, rejections, load/save
//! outcomes) through an injected sink rather than a hardwired global, so
//! tests can capture diagnostics without touching the filesystem. Adapters
//! that actually write somewhere (log file, tracing) live in the outer
//! layers.

use std::fmt;
use std::sync::Mutex;

/// Severity of a diagnostic message.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Level {
    Info,
    Warning,
    Error,
}

impl Level {
    /// Upper-case label as it appears in the log file.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receiver for diagnostic messages.
///
/// `emit` must never fail from the caller's point of view: a sink that hits
/// an IO problem deals with it internally. The store's availability does not
/// depend on its diagnostics channel.
pub trait DiagnosticSink {
    fn emit(&self, level: Level, message: &str);
}

/// Sink that discards everything. Default for stores built without an
/// explicit sink.
#[derive(Debug, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&self, _level: Level, _message: &str) {}
}

/// In-memory sink for tests: records every emission in order.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<(Level, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far.
    pub fn records(&self) -> Vec<(Level, String)> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    /// Messages emitted at `level`, in emission order.
    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.records()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m)
            .collect()
    }
}

impl DiagnosticSink for MemorySink {
    fn emit(&self, level: Level, message: &str) {
        if let Ok(mut records) = self.records.lock() {
            records.push((level, message.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_labels_match_log_format() {
        assert_eq!(Level::Info.to_string(), "INFO");
        assert_eq!(Level::Warning.to_string(), "WARNING");
        assert_eq!(Level::Error.to_string(), "ERROR");
    }

    #[test]
    fn memory_sink_records_in_order() {
        let sink = MemorySink::new();
        sink.emit(Level::Info, "first");
        sink.emit(Level::Warning, "second");

        assert_eq!(
            sink.records(),
            vec![
                (Level::Info, "first".to_string()),
                (Level::Warning, "second".to_string()),
            ]
        );
        assert_eq!(sink.messages_at(Level::Warning), vec!["second".to_string()]);
    }
}
