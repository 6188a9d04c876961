//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide subscriber. Everything in the framework logs
//! through `tracing` with structured fields (`record_type`, `id`, `size`), so the output can be
//! filtered per record type.
//!
//! ```bash
//! RUST_LOG=info cargo run --bin user-service      # creations and lifecycle
//! RUST_LOG=debug cargo run --bin order-service    # every read and payload
//! ```

use tracing_subscriber::EnvFilter;

/// Initialise the tracing subscriber.
///
/// Levels come from `RUST_LOG`; when it is unset or invalid, `info` is used. Calling this
/// more than once is harmless: later calls leave the first subscriber in place.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // record_type already says where a line came from
        .compact()
        .try_init();
}
