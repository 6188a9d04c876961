use directory_ledger::config::{ServiceConfig, ORDER_SERVICE_DEFAULT_PORT};
use directory_ledger::lifecycle::{setup_tracing, ServiceError, ServiceRuntime};
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), ServiceError> {
    setup_tracing();

    let config = ServiceConfig::from_env(ORDER_SERVICE_DEFAULT_PORT)
        .inspect_err(|err| error!(error = %err, "Configuration rejected"))?;

    ServiceRuntime::orders(&config)?
        .run(config.bind_addr())
        .await
        .inspect_err(|err| error!(error = %err, "Order service stopped"))
}
