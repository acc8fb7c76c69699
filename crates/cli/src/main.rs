//! Demonstration entry point.
//!
//! Runs a fixed sequence of store operations (sample usage, not a
//! contractual CLI surface): stock a few items, remove some, print the
//! apple quantity and the low-stock list, save, reload, report.

use std::sync::Arc;

use anyhow::Context;

use stockroom_core::{DiagnosticSink, Level};
use stockroom_infra::{DEFAULT_LOG_PATH, DEFAULT_SNAPSHOT_PATH, FileSink, load, save};
use stockroom_inventory::{DEFAULT_LOW_STOCK_THRESHOLD, InventoryStore};
use stockroom_observability::TracingSink;

/// Broadcasts each diagnostic to every configured sink (log file plus
/// process tracing).
struct FanoutSink {
    sinks: Vec<Arc<dyn DiagnosticSink>>,
}

impl DiagnosticSink for FanoutSink {
    fn emit(&self, level: Level, message: &str) {
        for sink in &self.sinks {
            sink.emit(level, message);
        }
    }
}

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let file_sink = FileSink::open(DEFAULT_LOG_PATH)
        .with_context(|| format!("failed to open diagnostic log at {DEFAULT_LOG_PATH}"))?;
    let sink = Arc::new(FanoutSink {
        sinks: vec![Arc::new(file_sink), Arc::new(TracingSink)],
    });

    let mut store = InventoryStore::with_sink(sink);
    let mut journal = Vec::new();

    // Rejections are diagnosed through the sink; execution continues.
    let _ = store.add("apple", 10, Some(&mut journal));
    let _ = store.add("banana", 5, None);
    let _ = store.add("grapes", 2, None);
    let _ = store.remove("apple", 3);
    let _ = store.remove("orange", 1);

    println!("Apple stock: {}", store.quantity("apple"));
    println!("Low items: {:?}", store.low_stock(DEFAULT_LOW_STOCK_THRESHOLD));

    let _ = save(&store, DEFAULT_SNAPSHOT_PATH);
    let _ = load(&mut store, DEFAULT_SNAPSHOT_PATH);
    store.report().context("failed to write stock report")?;

    Ok(())
}
