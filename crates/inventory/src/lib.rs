//! Inventory domain module.
//!
//! This crate contains the stock mapping and its business rules, implemented
//! purely as deterministic domain logic (no IO, no storage).

pub mod store;

pub use store::{DEFAULT_LOW_STOCK_THRESHOLD, InventoryStore, StockMap};
