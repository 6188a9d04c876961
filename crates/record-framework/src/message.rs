//! # Store Messages
//!
//! Message types exchanged between a [`ResourceClient`](crate::ResourceClient) and its
//! [`ResourceActor`](crate::ResourceActor).

use crate::record::Record;
use tokio::sync::oneshot;

/// One-shot channel the actor answers on.
pub type Response<T> = oneshot::Sender<T>;

/// Request sent to the actor.
///
/// The variants mirror the append-only store contract: read everything, read one, create one.
/// There is no update or delete; records live for the lifetime of the actor.
#[derive(Debug)]
pub enum ResourceRequest<T: Record> {
    List {
        respond_to: Response<Vec<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
}
