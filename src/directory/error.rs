//! Error types for the user directory.

use record_framework::StoreError;
use thiserror::Error;

/// Errors that can occur during directory operations.
///
/// An unknown user is not an error: lookups return `Ok(None)`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DirectoryError {
    /// The backing store could not be reached.
    #[error("User store unavailable: {0}")]
    Store(#[from] StoreError),
}
