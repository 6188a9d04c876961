//! # Order Ledger
//!
//! The Ledger Store service: holds [`Order`] records and, on every read, attaches the owning
//! user's display name through a [`NameResolver`].
//!
//! ## Read path
//!
//! 1. Take a snapshot from the store. The store returns owned records, so its lock (or its
//!    actor) is already free when the snapshot arrives.
//! 2. Resolve names one order at a time, in snapshot order. One resolver call per order.
//! 3. Attach the name when resolution succeeded; leave `user_name` empty otherwise.
//!
//! Writes never consult the resolver, and `user_id` is never checked against the directory.

pub mod error;

pub use error::*;

use crate::clients::NameResolver;
use crate::model::{EnrichedOrder, Order, OrderCreate, OrderId};
use record_framework::RecordStore;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Handle to the order ledger. Cheap to clone; clones share one store and one resolver.
#[derive(Clone)]
pub struct OrderLedger {
    store: Arc<dyn RecordStore<Order>>,
    resolver: Arc<dyn NameResolver>,
}

impl OrderLedger {
    pub fn new(store: Arc<dyn RecordStore<Order>>, resolver: Arc<dyn NameResolver>) -> Self {
        Self { store, resolver }
    }

    /// Every order, each enriched with its owner's name where resolvable.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<EnrichedOrder>, LedgerError> {
        let orders = self.store.list().await?;

        let mut enriched = Vec::with_capacity(orders.len());
        for order in orders {
            enriched.push(self.enrich(order).await);
        }
        let named = enriched.iter().filter(|order| order.user_name.is_some()).count();
        debug!(count = enriched.len(), named, "Orders enriched");
        Ok(enriched)
    }

    /// One order by id, enriched. No resolver call is made for an unknown id.
    #[instrument(skip(self))]
    pub async fn get(&self, id: OrderId) -> Result<Option<EnrichedOrder>, LedgerError> {
        match self.store.get(id).await? {
            Some(order) => Ok(Some(self.enrich(order).await)),
            None => Ok(None),
        }
    }

    /// Store a new order. The returned record carries no `user_name`.
    #[instrument(skip(self))]
    pub async fn create(&self, params: OrderCreate) -> Result<Order, LedgerError> {
        let order = self.store.create(params).await?;
        info!(order_id = %order.id, user_id = %order.user_id, "Order created");
        Ok(order)
    }

    async fn enrich(&self, order: Order) -> EnrichedOrder {
        let user_name = self.resolver.resolve(order.user_id).await.into_name();
        EnrichedOrder { order, user_name }
    }
}
