//! # Actor-backed Store
//!
//! This module defines the `ResourceActor`, the alternative to [`LockedStore`](crate::LockedStore)
//! where a single Tokio task owns the records and processes requests one at a time. Exclusive
//! ownership of the map inside the task replaces the lock.

use crate::client::ResourceClient;
use crate::message::ResourceRequest;
use crate::record::{next_id_after, record_type, Record};
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// The actor that owns a collection of records.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`records`, `next_id`) and
/// the receiver end of the channel. The matching [`ResourceClient`] is the "Client" half and
/// implements [`RecordStore`](crate::RecordStore), so handlers cannot tell the two backends apart.
///
/// **Concurrency Model**:
/// Requests are processed sequentially, which serialises reads as well as writes. That is a
/// stronger ordering than the shared/exclusive discipline of the lock-backed store, never a
/// weaker one.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::with_seed()` to get the `actor` and its `client`.
/// 2.  **Run**: Spawn `actor.run()` in a background task.
/// 3.  **Shutdown**: Drop every clone of the client; the loop ends and the task finishes.
pub struct ResourceActor<T: Record> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    records: HashMap<T::Id, T>,
    next_id: u64,
}

impl<T: Record> ResourceActor<T> {
    /// Creates an empty actor and its client.
    ///
    /// `buffer_size` is the capacity of the request channel; when it is full, client calls wait.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        Self::with_seed(buffer_size, Vec::new())
    }

    /// Creates an actor pre-loaded with `seed` and its client.
    pub fn with_seed(buffer_size: usize, seed: Vec<T>) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let next_id = next_id_after(&seed);
        let actor = Self {
            receiver,
            records: seed.into_iter().map(|record| (record.id(), record)).collect(),
            next_id,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the event loop until every client has been dropped.
    pub async fn run(mut self) {
        let record_type = record_type::<T>();
        info!(record_type, size = self.records.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { respond_to } => {
                    let records: Vec<T> = self.records.values().cloned().collect();
                    debug!(record_type, count = records.len(), "List");
                    let _ = respond_to.send(records);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let record = self.records.get(&id).cloned();
                    debug!(record_type, %id, found = record.is_some(), "Get");
                    let _ = respond_to.send(record);
                }
                ResourceRequest::Create { params, respond_to } => {
                    debug!(record_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    let record = T::from_create(id, params);
                    self.records.insert(id, record.clone());
                    info!(record_type, %id, size = self.records.len(), "Created");
                    let _ = respond_to.send(record);
                }
            }
        }

        info!(record_type, size = self.records.len(), "Shutdown");
    }
}
