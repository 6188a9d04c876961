use std::sync::Arc;

use record_framework::{LockedStore, Record, RecordStore, ResourceActor};
use tokio::task::JoinHandle;
use tracing::info;

use crate::config::StoreBackend;

/// Mailbox size for actor-backed stores.
pub const ACTOR_BUFFER_SIZE: usize = 32;

/// A running store: the shared handle plus, for the actor backend, the task that owns the data.
pub struct StoreHandle<T: Record> {
    store: Arc<dyn RecordStore<T>>,
    task: Option<JoinHandle<()>>,
}

impl<T: Record> StoreHandle<T> {
    /// Start a store of the given backend, pre-loaded with `seed`.
    ///
    /// The actor backend spawns its task here, so this must run inside a Tokio runtime.
    pub fn start(backend: StoreBackend, seed: Vec<T>) -> Self {
        info!(?backend, seeded = seed.len(), "Starting store");
        match backend {
            StoreBackend::Locked => Self {
                store: Arc::new(LockedStore::with_seed(seed)),
                task: None,
            },
            StoreBackend::Actor => {
                let (actor, client) = ResourceActor::with_seed(ACTOR_BUFFER_SIZE, seed);
                Self {
                    store: Arc::new(client),
                    task: Some(tokio::spawn(actor.run())),
                }
            }
        }
    }

    pub fn store(&self) -> Arc<dyn RecordStore<T>> {
        Arc::clone(&self.store)
    }

    /// Split into the store and its owning task (if any).
    ///
    /// The task finishes once every clone of the store has been dropped.
    pub fn into_parts(self) -> (Arc<dyn RecordStore<T>>, Option<JoinHandle<()>>) {
        (self.store, self.task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{seed_users, UserCreate, UserId};

    #[tokio::test]
    async fn both_backends_continue_after_seed() {
        for backend in [StoreBackend::Locked, StoreBackend::Actor] {
            let handle = StoreHandle::start(backend, seed_users());
            let store = handle.store();

            let user = store.create(UserCreate::default()).await.unwrap();
            assert_eq!(user.id, UserId(3), "backend {backend:?}");
            assert_eq!(store.list().await.unwrap().len(), 3);
        }
    }

    #[tokio::test]
    async fn actor_task_ends_when_store_is_dropped() {
        let (store, task) = StoreHandle::start(StoreBackend::Actor, seed_users()).into_parts();
        let task = task.expect("actor backend spawns a task");

        drop(store);

        tokio::time::timeout(std::time::Duration::from_secs(1), task)
            .await
            .expect("actor task should finish")
            .unwrap();
    }

    #[test]
    fn locked_backend_has_no_task() {
        let (_, task) = StoreHandle::start(StoreBackend::Locked, seed_users()).into_parts();
        assert!(task.is_none());
    }
}
