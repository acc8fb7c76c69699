//! Store error model.

use thiserror::Error;

/// Result type used across the store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error.
///
/// Keep this focused on deterministic rejections of store operations
/// (validation, missing items). Infrastructure concerns belong elsewhere.
///
/// Every variant marks an operation that was rejected **without mutating**
/// the stock mapping; none of them is ever escalated into a panic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// An input failed validation (e.g. blank item name, non-positive
    /// quantity on add).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The named item is not in the stock mapping.
    #[error("item not found: {0}")]
    NotFound(String),
}

impl StoreError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(item: impl Into<String>) -> Self {
        Self::NotFound(item.into())
    }
}
