//! # HTTP Name Resolver
//!
//! Reqwest-backed [`NameResolver`] that asks the user service for `GET /users/{id}`.
//!
//! This adapter owns transport details only: the URL, the request timeout, status handling and
//! JSON decoding. Every failure becomes an [`Unresolved`] value and a `warn` line; nothing is
//! retried or cached.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument, warn};

use crate::clients::{NameResolver, Resolution, Unresolved};
use crate::model::{User, UserId};

/// Resolves user names over HTTP against the user directory.
#[derive(Clone)]
pub struct HttpNameResolver {
    client: Client,
    base_url: String,
}

impl HttpNameResolver {
    /// Build a client for the directory at `base_url` (e.g. `http://localhost:8080`).
    ///
    /// `timeout` bounds the whole request, connect through body.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn user_url(&self, user_id: UserId) -> String {
        format!("{}/users/{}", self.base_url, user_id)
    }

    async fn fetch_user(&self, user_id: UserId) -> Result<User, Unresolved> {
        let response = self
            .client
            .get(self.user_url(user_id))
            .send()
            .await
            .map_err(|error| Unresolved::Transport(error.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(Unresolved::Status(status.as_u16()));
        }

        response.json::<User>().await.map_err(|error| {
            if error.is_decode() {
                Unresolved::Decode(error.to_string())
            } else {
                Unresolved::Transport(error.to_string())
            }
        })
    }
}

#[async_trait]
impl NameResolver for HttpNameResolver {
    #[instrument(skip(self))]
    async fn resolve(&self, user_id: UserId) -> Resolution {
        match self.fetch_user(user_id).await {
            Ok(user) => {
                debug!(name = %user.name, "Resolved");
                Resolution::Resolved(user.name)
            }
            Err(reason) => {
                warn!(%reason, "User name unresolved");
                Resolution::Unresolved(reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = HttpNameResolver::new("http://users.local:8080/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url(), "http://users.local:8080");
        assert_eq!(client.user_url(UserId(7)), "http://users.local:8080/users/7");
    }

    #[tokio::test]
    async fn unreachable_directory_is_unresolved() {
        // Bind then drop to get a local port nothing listens on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = HttpNameResolver::new(format!("http://{addr}"), Duration::from_secs(2)).unwrap();
        let resolution = client.resolve(UserId(1)).await;

        assert!(matches!(
            resolution,
            Resolution::Unresolved(Unresolved::Transport(_))
        ));
    }

    #[tokio::test]
    async fn non_user_body_is_a_decode_failure() {
        let stub = axum::Router::new().route("/users/{id}", axum::routing::get(|| async { "oops" }));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, stub).await.unwrap() });

        let client = HttpNameResolver::new(format!("http://{addr}"), Duration::from_secs(2)).unwrap();
        let resolution = client.resolve(UserId(1)).await;

        assert!(matches!(
            resolution,
            Resolution::Unresolved(Unresolved::Decode(_))
        ));
    }

    #[tokio::test]
    async fn unknown_user_is_a_status_failure() {
        let stub = axum::Router::new().route(
            "/users/{id}",
            axum::routing::get(|| async { axum::http::StatusCode::NOT_FOUND }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, stub).await.unwrap() });

        let client = HttpNameResolver::new(format!("http://{addr}"), Duration::from_secs(2)).unwrap();

        assert_eq!(
            client.resolve(UserId(-1)).await,
            Resolution::Unresolved(Unresolved::Status(404))
        );
    }
}
