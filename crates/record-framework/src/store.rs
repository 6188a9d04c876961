//! # RecordStore Interface
//!
//! The seam between request handlers and whatever keeps the records. Two implementations ship
//! with the framework:
//!
//! | Backend | Type | Discipline |
//! |---------|------|------------|
//! | Lock | [`LockedStore`](crate::LockedStore) | shared lock for reads, exclusive lock for create |
//! | Actor | [`ResourceClient`](crate::ResourceClient) | one task owns the map, requests are serialised |
//!
//! Both hand back **owned** values. No guard or borrow outlives a call, so a caller that goes on
//! to do slow work (an outbound HTTP request, say) cannot block writers while doing it.

use crate::error::StoreError;
use crate::record::Record;
use async_trait::async_trait;

/// Append-only keyed store for one record type.
///
/// Identifiers are assigned by the store from a counter that only moves forward, so they are
/// strictly increasing in creation order and never reused.
#[async_trait]
pub trait RecordStore<T: Record>: Send + Sync {
    /// Snapshot of every record, in no particular order.
    async fn list(&self) -> Result<Vec<T>, StoreError>;

    /// Exact-match lookup. Absence is `Ok(None)`, not an error.
    async fn get(&self, id: T::Id) -> Result<Option<T>, StoreError>;

    /// Assign the next identifier, store the record and return it.
    async fn create(&self, params: T::Create) -> Result<T, StoreError>;
}
