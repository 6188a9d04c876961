//! # Actor Client
//!
//! The cloneable handle for a [`ResourceActor`](crate::ResourceActor).

use crate::error::StoreError;
use crate::message::{ResourceRequest, Response};
use crate::record::Record;
use crate::store::RecordStore;
use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `ResourceActor`.
///
/// Holds only the sending half of the channel, so cloning is cheap and clones can be handed to
/// every request handler. The actor stops once the last clone is dropped.
pub struct ResourceClient<T: Record> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Record> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: Record> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)
    }
}

#[async_trait]
impl<T: Record> RecordStore<T> for ResourceClient<T> {
    async fn list(&self) -> Result<Vec<T>, StoreError> {
        self.request(|respond_to| ResourceRequest::List { respond_to })
            .await
    }

    async fn get(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    async fn create(&self, params: T::Create) -> Result<T, StoreError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }
}
