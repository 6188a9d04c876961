//! # Lifecycle
//!
//! Wiring and process lifetime for the two services.
//!
//! [`ServiceRuntime`] picks the configured store backend, builds the service's router and
//! serves it. On Ctrl-C the server drains its connections, the router (and with it every store
//! handle) is dropped, and any actor-backed store task is awaited before the process exits.
//!
//! Logging is installed separately with [`setup_tracing`], which the binaries call first.

pub mod error;
pub mod runtime;
pub mod store;

pub use error::ServiceError;
pub use record_framework::tracing::setup_tracing;
pub use runtime::{bind, shutdown_signal, ServiceRuntime};
pub use store::StoreHandle;
