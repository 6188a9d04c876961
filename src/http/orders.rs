use axum::body::Bytes;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::Json;

use super::decode_json;
use super::error::{ApiError, ApiResult};
use super::path::id_from_path;
use crate::ledger::OrderLedger;
use crate::model::{EnrichedOrder, Order, OrderCreate, OrderId};

pub async fn list_orders(
    State(ledger): State<OrderLedger>,
) -> ApiResult<Json<Vec<EnrichedOrder>>> {
    Ok(Json(ledger.list().await?))
}

/// `GET /orders/...`: whatever follows the prefix, extra segments included, is scanned for
/// the id.
pub async fn get_order(
    State(ledger): State<OrderLedger>,
    uri: Uri,
) -> ApiResult<Json<EnrichedOrder>> {
    lookup_order(&ledger, id_from_path(uri.path(), "/orders/")).await
}

/// The created order is returned as stored: no `user_name`, and `user_id` unchecked.
pub async fn create_order(
    State(ledger): State<OrderLedger>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Order>)> {
    let params: OrderCreate = decode_json(&body)?;
    let order = ledger.create(params).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

async fn lookup_order(ledger: &OrderLedger, id: u64) -> ApiResult<Json<EnrichedOrder>> {
    ledger
        .get(OrderId(id))
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("order not found"))
}
