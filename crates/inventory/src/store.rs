use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use stockroom_core::{DiagnosticSink, Level, NullSink, StoreError, StoreResult};

/// The stock mapping: item name to on-hand quantity.
///
/// A BTreeMap keeps iteration deterministic (sorted by item name), which is
/// what reports and low-stock listings follow.
pub type StockMap = BTreeMap<String, i64>;

/// Conventional threshold below which an item counts as low stock.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// The inventory store: a mutable stock mapping plus an injected diagnostic
/// sink.
///
/// Invariant maintained by the mutation operations: every stored quantity is
/// strictly positive. An entry whose quantity would reach zero or below is
/// deleted outright rather than retained.
///
/// Rejected operations return an error and leave the mapping untouched; no
/// operation panics. Diagnostics about each outcome go to the sink, never to
/// the caller's control flow.
pub struct InventoryStore {
    stock: StockMap,
    sink: Arc<dyn DiagnosticSink>,
}

impl InventoryStore {
    /// Empty store with a discarding sink.
    pub fn new() -> Self {
        Self::with_sink(Arc::new(NullSink))
    }

    /// Empty store emitting diagnostics to `sink`.
    pub fn with_sink(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            stock: StockMap::new(),
            sink,
        }
    }

    /// The sink this store reports outcomes to.
    pub fn sink(&self) -> &dyn DiagnosticSink {
        self.sink.as_ref()
    }

    /// Add `qty` of `item`, creating the entry if absent.
    ///
    /// Rejects blank item names and non-positive quantities; both rejections
    /// emit a warning and leave the mapping unchanged. On success a
    /// confirmation line is appended to `journal` (if one was passed) and
    /// emitted at info.
    pub fn add(
        &mut self,
        item: &str,
        qty: i64,
        journal: Option<&mut Vec<String>>,
    ) -> StoreResult<()> {
        if item.trim().is_empty() {
            self.sink
                .emit(Level::Warning, "invalid add: item name cannot be blank");
            return Err(StoreError::validation("item name cannot be blank"));
        }

        if qty <= 0 {
            let msg = format!("quantity must be positive for {item}");
            self.sink.emit(Level::Warning, &msg);
            return Err(StoreError::validation(msg));
        }

        *self.stock.entry(item.to_string()).or_insert(0) += qty;

        let message = format!("Added {qty} of {item}");
        if let Some(journal) = journal {
            journal.push(message.clone());
        }
        self.sink.emit(Level::Info, &message);
        Ok(())
    }

    /// Remove `qty` of `item`.
    ///
    /// An absent item is the single rejection path: warning emitted, mapping
    /// unchanged. If present, the quantity is subtracted as given; a result
    /// at or below zero deletes the entry entirely (quantities collapse to
    /// non-existence, never to a stored zero).
    pub fn remove(&mut self, item: &str, qty: i64) -> StoreResult<()> {
        let Some(current) = self.stock.get_mut(item) else {
            self.sink.emit(
                Level::Warning,
                &format!("attempted to remove non-existent item: {item}"),
            );
            return Err(StoreError::not_found(item));
        };

        *current -= qty;
        if *current <= 0 {
            self.stock.remove(item);
            self.sink
                .emit(Level::Info, &format!("{item} removed from stock"));
        }
        Ok(())
    }

    /// Current quantity of `item`, 0 if absent. Pure read.
    pub fn quantity(&self, item: &str) -> i64 {
        self.stock.get(item).copied().unwrap_or(0)
    }

    /// Item names with quantity strictly below `threshold`, in mapping
    /// iteration order. Pure read.
    pub fn low_stock(&self, threshold: i64) -> Vec<&str> {
        self.stock
            .iter()
            .filter(|(_, qty)| **qty < threshold)
            .map(|(item, _)| item.as_str())
            .collect()
    }

    /// Write the stock report (`Items Report:` header, one `item -> qty`
    /// line per entry) to `w`.
    pub fn report_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        writeln!(w, "Items Report:")?;
        for (item, qty) in &self.stock {
            writeln!(w, "{item} -> {qty}")?;
        }
        Ok(())
    }

    /// Write the stock report to standard output.
    pub fn report(&self) -> io::Result<()> {
        self.report_to(&mut io::stdout())
    }

    pub fn len(&self) -> usize {
        self.stock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    /// Iterate entries in mapping order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.stock.iter().map(|(item, qty)| (item.as_str(), *qty))
    }

    /// Borrow the whole mapping (used when serializing a snapshot).
    pub fn snapshot(&self) -> &StockMap {
        &self.stock
    }

    /// Replace the whole mapping (used when loading a snapshot).
    pub fn replace(&mut self, stock: StockMap) {
        self.stock = stock;
    }
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InventoryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InventoryStore")
            .field("stock", &self.stock)
            .finish_non_exhaustive()
    }
}
