//! Service configuration from environment variables.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `PORT` | listen port | 8080 (users), 8081 (orders) |
//! | `USER_SERVICE_URL` | directory base URL used for enrichment | `http://localhost:8080` |
//! | `USER_SERVICE_TIMEOUT_MS` | timeout for one enrichment request | 2000 |
//! | `STORE_BACKEND` | `locked` or `actor` | `locked` |
//!
//! Blank values count as unset. A value that is present but unparseable is an error; startup
//! aborts rather than silently falling back.

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

pub const USER_SERVICE_DEFAULT_PORT: u16 = 8080;
pub const ORDER_SERVICE_DEFAULT_PORT: u16 = 8081;
pub const DEFAULT_USER_SERVICE_URL: &str = "http://localhost:8080";
pub const DEFAULT_USER_SERVICE_TIMEOUT: Duration = Duration::from_millis(2000);

/// Errors raised while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be {expected}, got {value:?}")]
    Invalid {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Which [`RecordStore`](record_framework::RecordStore) implementation backs a service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StoreBackend {
    /// [`LockedStore`](record_framework::LockedStore): reader/writer lock over a map.
    #[default]
    Locked,
    /// [`ResourceActor`](record_framework::ResourceActor): one task owns the map.
    Actor,
}

impl FromStr for StoreBackend {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "locked" | "lock" => Ok(Self::Locked),
            "actor" => Ok(Self::Actor),
            _ => Err(()),
        }
    }
}

/// Settings shared by both services. The user service ignores the `user_service_*` fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub port: u16,
    pub user_service_url: String,
    pub user_service_timeout: Duration,
    pub store_backend: StoreBackend,
}

impl ServiceConfig {
    /// Defaults for a service listening on `port`.
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            user_service_url: DEFAULT_USER_SERVICE_URL.to_owned(),
            user_service_timeout: DEFAULT_USER_SERVICE_TIMEOUT,
            store_backend: StoreBackend::default(),
        }
    }

    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if any variable is present but cannot be parsed.
    pub fn from_env(default_port: u16) -> Result<Self, ConfigError> {
        Self::from_lookup(default_port, |name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to its raw value.
    ///
    /// # Errors
    ///
    /// Returns an error if any variable is present but cannot be parsed.
    pub fn from_lookup(
        default_port: u16,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let env = |name: &str| non_blank(lookup(name));
        let mut config = Self::with_port(default_port);

        if let Some(port) = parse_var(&env, "PORT", "a port number (0-65535)")? {
            config.port = port;
        }
        if let Some(url) = env("USER_SERVICE_URL") {
            config.user_service_url = url.trim_end_matches('/').to_owned();
        }
        if let Some(millis) = parse_var::<u64>(&env, "USER_SERVICE_TIMEOUT_MS", "a positive integer")? {
            if millis == 0 {
                return Err(invalid("USER_SERVICE_TIMEOUT_MS", "0", "a positive integer"));
            }
            config.user_service_timeout = Duration::from_millis(millis);
        }
        if let Some(backend) = parse_var(&env, "STORE_BACKEND", "\"locked\" or \"actor\"")? {
            config.store_backend = backend;
        }

        Ok(config)
    }

    /// Address to listen on: every interface, configured port.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_owned())
        }
    })
}

fn parse_var<T: FromStr>(
    env: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    expected: &'static str,
) -> Result<Option<T>, ConfigError> {
    let Some(value) = env(name) else {
        return Ok(None);
    };
    value
        .parse::<T>()
        .map(Some)
        .map_err(|_| invalid(name, &value, expected))
}

fn invalid(name: &'static str, value: &str, expected: &'static str) -> ConfigError {
    ConfigError::Invalid {
        name,
        value: value.to_owned(),
        expected,
    }
}
