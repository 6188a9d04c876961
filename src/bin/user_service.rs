use directory_ledger::config::{ServiceConfig, USER_SERVICE_DEFAULT_PORT};
use directory_ledger::lifecycle::{setup_tracing, ServiceError, ServiceRuntime};
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), ServiceError> {
    setup_tracing();

    let config = ServiceConfig::from_env(USER_SERVICE_DEFAULT_PORT)
        .inspect_err(|err| error!(error = %err, "Configuration rejected"))?;

    ServiceRuntime::users(&config)
        .run(config.bind_addr())
        .await
        .inspect_err(|err| error!(error = %err, "User service stopped"))
}
