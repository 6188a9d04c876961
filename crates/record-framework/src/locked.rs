//! # Lock-backed Store
//!
//! [`LockedStore`] keeps the records and the identifier counter behind a single
//! `tokio::sync::RwLock`. Reads share the lock; `create` takes it exclusively for the counter
//! bump and the insert together, so writes are totally ordered and every assigned identifier is
//! unique.

use crate::error::StoreError;
use crate::record::{next_id_after, record_type, Record};
use crate::store::RecordStore;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, info};

struct State<T: Record> {
    records: HashMap<T::Id, T>,
    next_id: u64,
}

/// In-memory store guarded by a reader/writer lock.
pub struct LockedStore<T: Record> {
    state: RwLock<State<T>>,
}

impl<T: Record> LockedStore<T> {
    /// Creates an empty store whose first identifier is 1.
    pub fn new() -> Self {
        Self::with_seed(Vec::new())
    }

    /// Creates a store pre-loaded with `seed`.
    ///
    /// The counter starts above the highest seeded identifier.
    pub fn with_seed(seed: Vec<T>) -> Self {
        let next_id = next_id_after(&seed);
        let records = seed.into_iter().map(|record| (record.id(), record)).collect();
        Self {
            state: RwLock::new(State { records, next_id }),
        }
    }

    /// Number of records currently held.
    pub async fn len(&self) -> usize {
        self.state.read().await.records.len()
    }

    /// Whether the store holds no records at all.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl<T: Record> Default for LockedStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> RecordStore<T> for LockedStore<T> {
    async fn list(&self) -> Result<Vec<T>, StoreError> {
        let state = self.state.read().await;
        let records: Vec<T> = state.records.values().cloned().collect();
        debug!(record_type = record_type::<T>(), count = records.len(), "List");
        Ok(records)
    }

    async fn get(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        let record = self.state.read().await.records.get(&id).cloned();
        debug!(record_type = record_type::<T>(), %id, found = record.is_some(), "Get");
        Ok(record)
    }

    async fn create(&self, params: T::Create) -> Result<T, StoreError> {
        let mut state = self.state.write().await;
        let id = T::Id::from(state.next_id);
        state.next_id += 1;

        let record = T::from_create(id, params);
        state.records.insert(id, record.clone());
        info!(record_type = record_type::<T>(), %id, size = state.records.len(), "Created");
        Ok(record)
    }
}
