//! # Directory Ledger
//!
//! Two cooperating HTTP services over in-memory record stores:
//!
//! - **user-service** (the directory) keeps users and answers `GET /users/{id}`.
//! - **order-service** (the ledger) keeps orders and, on every read, asks the directory for the
//!   owner's name. A missing, slow or failing directory only drops the name; the order is still
//!   returned.
//!
//! ## Module Tour
//!
//! ### 1. Storage ([`record_framework`])
//! The workspace crate providing [`RecordStore`](record_framework::RecordStore) and its two
//! backends. Every call hands back owned values, so no store access spans an enrichment call.
//!
//! ### 2. Domain ([`model`], [`directory`], [`ledger`])
//! Records and their create payloads, plus the two service layers.
//! - **Key items**: [`UserDirectory`](directory::UserDirectory),
//!   [`OrderLedger`](ledger::OrderLedger).
//!
//! ### 3. Outbound ([`clients`])
//! [`NameResolver`](clients::NameResolver) and its HTTP implementation with an explicit request
//! timeout, plus [`MockResolver`](clients::MockResolver) for tests.
//!
//! ### 4. Edges ([`http`], [`config`], [`lifecycle`])
//! Axum routers, environment configuration and the serve/shutdown loop.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run --bin user-service
//! USER_SERVICE_URL=http://localhost:8080 cargo run --bin order-service
//! ```

pub mod clients;
pub mod config;
pub mod directory;
pub mod http;
pub mod ledger;
pub mod lifecycle;
pub mod model;
