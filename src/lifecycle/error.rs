use std::io;
use std::net::SocketAddr;

use thiserror::Error;
use tokio::task::JoinError;

use crate::config::ConfigError;

/// Errors that stop a service process.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] io::Error),

    #[error("Failed to build the name resolver: {0}")]
    Client(#[from] reqwest::Error),

    /// A store task panicked or was cancelled.
    #[error("Store task failed: {0}")]
    Task(#[from] JoinError),
}
