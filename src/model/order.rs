use crate::model::{null_as_default, UserId};
use record_framework::Record;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders. Encoded as a bare JSON integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<OrderId> for u64 {
    fn from(id: OrderId) -> Self {
        id.0
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored order.
///
/// `user_id` is a soft reference: nothing checks that the user exists, at write time or later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub product: String,
    pub amount: f64,
}

/// Payload for creating a new order.
///
/// Like [`UserCreate`](crate::model::UserCreate), this decodes structurally: missing fields take
/// their defaults (so do `null` ones), `user_id` may be any integer, negative included, and a
/// `user_name` in the body is dropped, never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderCreate {
    #[serde(alias = "User_id", alias = "USER_ID", deserialize_with = "null_as_default")]
    pub user_id: UserId,
    #[serde(alias = "Product", alias = "PRODUCT", deserialize_with = "null_as_default")]
    pub product: String,
    #[serde(alias = "Amount", alias = "AMOUNT", deserialize_with = "null_as_default")]
    pub amount: f64,
}

/// An order as returned by the read endpoints, with the owner's display name attached.
///
/// `user_name` only exists on the way out. It is left off the JSON entirely when the name could
/// not be resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedOrder {
    #[serde(flatten)]
    pub order: Order,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

impl Order {
    pub fn new(id: OrderId, user_id: UserId, product: impl Into<String>, amount: f64) -> Self {
        Self {
            id,
            user_id,
            product: product.into(),
            amount,
        }
    }
}

impl Record for Order {
    type Id = OrderId;
    type Create = OrderCreate;

    fn from_create(id: OrderId, params: OrderCreate) -> Self {
        Self {
            id,
            user_id: params.user_id,
            product: params.product,
            amount: params.amount,
        }
    }

    fn id(&self) -> OrderId {
        self.id
    }
}

/// The two orders every ledger starts with.
pub fn seed_orders() -> Vec<Order> {
    vec![
        Order::new(OrderId(1), UserId(1), "Ноутбук", 75000.0),
        Order::new(OrderId(2), UserId(2), "Смартфон", 35000.0),
    ]
}
