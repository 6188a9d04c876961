use record_framework::{LockedStore, Record, RecordStore, ResourceActor};
use std::collections::HashSet;
use std::sync::Arc;

// --- Test Record ---

#[derive(Clone, Debug, PartialEq)]
struct SimpleUser {
    id: u64,
    name: String,
}

#[derive(Debug)]
struct SimpleUserCreate {
    name: String,
}

impl Record for SimpleUser {
    type Id = u64;
    type Create = SimpleUserCreate;

    fn from_create(id: u64, params: SimpleUserCreate) -> Self {
        Self {
            id,
            name: params.name,
        }
    }

    fn id(&self) -> u64 {
        self.id
    }
}

fn seed() -> Vec<SimpleUser> {
    vec![
        SimpleUser {
            id: 1,
            name: "Alice".into(),
        },
        SimpleUser {
            id: 2,
            name: "Bob".into(),
        },
    ]
}

/// Lifecycle every backend must honour: seeded reads, create after seed, lookup, miss.
async fn exercise_store(store: Arc<dyn RecordStore<SimpleUser>>) {
    let mut users = store.list().await.unwrap();
    users.sort_by_key(|user| user.id);
    assert_eq!(users, seed());

    let created = store
        .create(SimpleUserCreate {
            name: "Carol".into(),
        })
        .await
        .unwrap();
    assert_eq!(created.id, 3);

    let fetched = store.get(3).await.unwrap().unwrap();
    assert_eq!(fetched, created);

    assert!(store.get(9999).await.unwrap().is_none());
}

/// Fires `count` creates at once and returns the ids handed out.
async fn concurrent_ids(store: Arc<dyn RecordStore<SimpleUser>>, count: usize) -> Vec<u64> {
    let mut handles = Vec::with_capacity(count);
    for i in 0..count {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store
                .create(SimpleUserCreate {
                    name: format!("user-{i}"),
                })
                .await
                .unwrap()
                .id
        }));
    }

    let mut ids = Vec::with_capacity(count);
    for handle in handles {
        ids.push(handle.await.unwrap());
    }
    ids
}

#[tokio::test]
async fn test_locked_store_lifecycle() {
    exercise_store(Arc::new(LockedStore::with_seed(seed()))).await;
}

#[tokio::test]
async fn test_actor_store_lifecycle() {
    let (actor, client) = ResourceActor::with_seed(16, seed());
    let handle = tokio::spawn(actor.run());

    exercise_store(Arc::new(client)).await;

    // The last client went away inside exercise_store, so the actor loop ends.
    handle.await.unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_get_unique_increasing_ids() {
    let (actor, client) = ResourceActor::with_seed(16, seed());
    let handle = tokio::spawn(actor.run());

    let backends: Vec<Arc<dyn RecordStore<SimpleUser>>> = vec![
        Arc::new(LockedStore::with_seed(seed())),
        Arc::new(client),
    ];

    for store in backends {
        let ids = concurrent_ids(store.clone(), 100).await;

        let unique: HashSet<u64> = ids.iter().copied().collect();
        assert_eq!(unique.len(), 100, "an id was handed out twice");
        assert_eq!(unique.iter().min(), Some(&3));
        assert_eq!(unique.iter().max(), Some(&102));

        // One more create after the burst lands strictly above everything before it.
        let next = store
            .create(SimpleUserCreate {
                name: "late".into(),
            })
            .await
            .unwrap();
        assert_eq!(next.id, 103);
    }

    handle.await.unwrap();
}
