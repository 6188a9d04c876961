//! # Record Framework
//!
//! This crate provides the building blocks for small, concurrency-safe, in-memory record stores.
//! A store owns identifier assignment for one resource type and offers three operations:
//! list everything, look one record up, create one record.
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into three layers:
//!
//! 1. **Record Layer** ([`Record`]) - your domain type and its creation payload
//! 2. **Store Interface** ([`RecordStore`]) - the async `list` / `get` / `create` contract
//! 3. **Backends** ([`LockedStore`], [`ResourceActor`] + [`ResourceClient`]) - how the map and
//!    the identifier counter are protected
//!
//! Handlers depend on `Arc<dyn RecordStore<T>>` only, so a backend is picked once at startup
//! and never leaks into request code.
//!
//! ## Invariants
//!
//! - Identifiers are strictly increasing per store and never reused.
//! - A seeded store starts its counter above the highest seeded identifier.
//! - Every call returns owned data; no lock is held once a call returns.
//!
//! ## Example
//!
//! ```rust
//! use record_framework::{LockedStore, Record, RecordStore};
//!
//! #[derive(Clone, Debug)]
//! struct Note {
//!     id: u64,
//!     text: String,
//! }
//!
//! impl Record for Note {
//!     type Id = u64;
//!     type Create = String;
//!
//!     fn from_create(id: u64, text: String) -> Self {
//!         Self { id, text }
//!     }
//!
//!     fn id(&self) -> u64 {
//!         self.id
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = LockedStore::<Note>::new();
//!     let note = store.create("hello".to_string()).await.unwrap();
//!     assert_eq!(note.id, 1);
//!     assert_eq!(store.get(1).await.unwrap().unwrap().text, "hello");
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - [`LockedStore`]: reads share a `tokio::sync::RwLock`, `create` holds it exclusively while
//!   it bumps the counter and inserts.
//! - [`ResourceActor`]: one Tokio task owns the map and answers requests sequentially.

pub mod actor;
pub mod client;
pub mod error;
pub mod locked;
pub mod message;
pub mod record;
pub mod store;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use error::StoreError;
pub use locked::LockedStore;
pub use message::{ResourceRequest, Response};
pub use record::{next_id_after, Record};
pub use store::RecordStore;
