use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{error, info};

use super::error::ServiceError;
use super::store::StoreHandle;
use crate::clients::HttpNameResolver;
use crate::config::ServiceConfig;
use crate::directory::UserDirectory;
use crate::http::{orders_router, users_router};
use crate::ledger::OrderLedger;
use crate::model::{seed_orders, seed_users};

/// A wired service, ready to serve.
///
/// Holds the router and the tasks of any actor-backed stores. The stores themselves live only
/// inside the router, so once serving stops and the router is gone the actors see their
/// channels close and exit.
pub struct ServiceRuntime {
    name: &'static str,
    router: Router,
    store_tasks: Vec<JoinHandle<()>>,
}

impl ServiceRuntime {
    /// The Directory Store service with its seeded users.
    pub fn users(config: &ServiceConfig) -> Self {
        let (store, task) = StoreHandle::start(config.store_backend, seed_users()).into_parts();
        let directory = UserDirectory::new(store);

        Self {
            name: "user-service",
            router: users_router(directory),
            store_tasks: task.into_iter().collect(),
        }
    }

    /// The Ledger Store service with its seeded orders, enriching through
    /// `config.user_service_url`.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be built.
    pub fn orders(config: &ServiceConfig) -> Result<Self, ServiceError> {
        let resolver =
            HttpNameResolver::new(&config.user_service_url, config.user_service_timeout)?;
        info!(
            url = resolver.base_url(),
            timeout = ?config.user_service_timeout,
            "Enrichment target"
        );

        let (store, task) = StoreHandle::start(config.store_backend, seed_orders()).into_parts();
        let ledger = OrderLedger::new(store, Arc::new(resolver));

        Ok(Self {
            name: "order-service",
            router: orders_router(ledger),
            store_tasks: task.into_iter().collect(),
        })
    }

    /// Bind `addr` and serve until Ctrl-C.
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound or the server fails.
    pub async fn run(self, addr: SocketAddr) -> Result<(), ServiceError> {
        let listener = bind(addr).await?;
        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `shutdown` completes, then wait for the store
    /// tasks to finish.
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails or a store task panicked.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<(), ServiceError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let Self {
            name,
            router,
            store_tasks,
        } = self;

        match listener.local_addr() {
            Ok(addr) => info!(service = name, %addr, "Listening"),
            Err(err) => error!(service = name, error = %err, "Listener address unavailable"),
        }

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(ServiceError::Serve)?;

        info!(service = name, tasks = store_tasks.len(), "Waiting for stores");
        for task in store_tasks {
            task.await?;
        }
        info!(service = name, "Shutdown complete");
        Ok(())
    }
}

/// Bind a TCP listener, naming the address on failure.
///
/// # Errors
///
/// Returns [`ServiceError::Bind`] if the address is in use or not permitted.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ServiceError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServiceError::Bind { addr, source })
}

/// Resolves on Ctrl-C. If the signal handler cannot be installed it logs and never resolves.
pub async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "Failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{StoreBackend, USER_SERVICE_DEFAULT_PORT};
    use std::time::Duration;
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn serve_stops_on_signal_and_joins_actor() {
        let config = ServiceConfig {
            store_backend: StoreBackend::Actor,
            ..ServiceConfig::with_port(USER_SERVICE_DEFAULT_PORT)
        };
        let runtime = ServiceRuntime::users(&config);
        assert_eq!(runtime.store_tasks.len(), 1);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let (stop_tx, stop_rx) = oneshot::channel::<()>();
        let server = tokio::spawn(runtime.serve(listener, async move {
            let _ = stop_rx.await;
        }));

        stop_tx.send(()).unwrap();
        let result = tokio::time::timeout(Duration::from_secs(5), server)
            .await
            .expect("server should stop")
            .unwrap();
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn orders_runtime_accepts_any_timeout() {
        let config = ServiceConfig {
            user_service_timeout: Duration::from_millis(u64::MAX),
            ..ServiceConfig::with_port(0)
        };

        let runtime = ServiceRuntime::orders(&config).unwrap();

        assert_eq!(runtime.name, "order-service");
        assert!(runtime.store_tasks.is_empty());
    }

    #[tokio::test]
    async fn bind_failure_names_the_address() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = taken.local_addr().unwrap();

        let err = bind(addr).await.unwrap_err();

        assert!(matches!(err, ServiceError::Bind { addr: a, .. } if a == addr));
    }
}
