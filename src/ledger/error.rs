//! Error types for the order ledger.

use record_framework::StoreError;
use thiserror::Error;

/// Errors that can occur during ledger operations.
///
/// Enrichment failures never appear here; they degrade to an order without a `user_name`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LedgerError {
    /// The backing store could not be reached.
    #[error("Order store unavailable: {0}")]
    Store(#[from] StoreError),
}
