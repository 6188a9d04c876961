//! # Store Errors
//!
//! Errors a [`RecordStore`](crate::RecordStore) can report. The lock-backed store never fails;
//! the actor-backed store fails only when its task is gone.

/// Errors that can occur while talking to a record store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Store actor closed")]
    ActorClosed,
    #[error("Store actor dropped response channel")]
    ActorDropped,
}
