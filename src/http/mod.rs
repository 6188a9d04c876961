//! # HTTP surface
//!
//! Axum routers for both services. Handlers decode bodies themselves so that any malformed or
//! mistyped JSON is answered with `400 {"error": "..."}`, and everything after `/users/` or
//! `/orders/` goes through [`id_from_path`] so that an unparseable id is a 404 rather than a 400.
//!
//! | Route | Users service | Orders service |
//! |-------|---------------|----------------|
//! | `GET /{kind}` | all users | all orders, enriched |
//! | `POST /{kind}` | 201 + new user | 201 + new order (not enriched) |
//! | `GET /{kind}/{id}...` | one user or 404 | one enriched order or 404 |
//! | `GET /health` | `{"status":"healthy"}` | same |
//!
//! Trailing segments after the id are ignored. Any other method on a known path is a 405.

pub mod error;
pub mod orders;
pub mod path;
pub mod users;

pub use error::{ApiError, ApiResult, ErrorBody};
pub use path::{id_from_path, parse_id_lenient};

use axum::routing::get;
use axum::{Json, Router};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::directory::UserDirectory;
use crate::ledger::OrderLedger;

/// Router for the Directory Store service.
pub fn users_router(directory: UserDirectory) -> Router {
    Router::new()
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/", get(users::get_user))
        .route("/users/{*rest}", get(users::get_user))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(directory)
}

/// Router for the Ledger Store service.
pub fn orders_router(ledger: OrderLedger) -> Router {
    Router::new()
        .route("/orders", get(orders::list_orders).post(orders::create_order))
        .route("/orders/", get(orders::get_order))
        .route("/orders/{*rest}", get(orders::get_order))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(ledger)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// Decode the first JSON value of a request body.
///
/// Anything after that value is ignored and a bare `null` yields the default payload. Every
/// failure (empty body, syntax, wrong types) is a 400.
pub(crate) fn decode_json<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T, ApiError> {
    match serde_json::Deserializer::from_slice(body)
        .into_iter::<Option<T>>()
        .next()
    {
        Some(Ok(value)) => Ok(value.unwrap_or_default()),
        Some(Err(err)) => Err(ApiError::bad_request(err.to_string())),
        None => Err(ApiError::bad_request("request body is empty")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UserCreate;
    use axum::http::StatusCode;

    #[test]
    fn decode_accepts_partial_objects() {
        let params: UserCreate = decode_json(br#"{"name":"Alice"}"#).unwrap();
        assert_eq!(params.name, "Alice");
        assert_eq!(params.email, "");
    }

    #[test]
    fn decode_reads_only_the_first_value() {
        let params: UserCreate = decode_json(br#"{"name":"a"} trailing"#).unwrap();
        assert_eq!(params.name, "a");

        let params: UserCreate = decode_json(b"null").unwrap();
        assert_eq!(params, UserCreate::default());
    }

    #[test]
    fn decode_rejects_malformed_and_mistyped_bodies() {
        let bodies: [&[u8]; 4] = [b"not json", br#"{"name": 7}"#, b"", b"[1,2]"];
        for body in bodies {
            let err = decode_json::<UserCreate>(body).unwrap_err();
            assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        }
    }
}
