//! `stockroom-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the store error model and the diagnostic sink abstraction.

pub mod diag;
pub mod error;

pub use diag::{DiagnosticSink, Level, MemorySink, NullSink};
pub use error::{StoreError, StoreResult};
