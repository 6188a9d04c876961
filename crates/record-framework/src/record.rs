//! # Record Trait
//!
//! The `Record` trait is the contract every stored resource (User, Order, …) implements to be
//! kept by a [`RecordStore`](crate::RecordStore). It names the identifier type and the creation
//! payload, and tells the store how to assemble a full record once an identifier is assigned.
//!
//! # Architecture Note
//! Identifier assignment belongs to the store, never to the caller. A `UserCreate` payload has
//! no `id` field at all, so a client cannot smuggle one in. The store draws the next value from
//! its counter, converts it into `Self::Id` and hands both to [`Record::from_create`].
//!
//! Identifiers round-trip through `u64` so that the store can seed its counter above any
//! pre-loaded record (see [`next_id_after`]).

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource must implement to be kept by a record store.
///
/// # Associated Types
/// - `Id`: a small copyable key. It must convert from and into `u64` because the store keeps
///   a plain numeric counter.
/// - `Create`: the payload a client submits (DTO). It never carries the identifier.
pub trait Record: Clone + Send + Sync + 'static {
    /// The unique identifier for this record.
    type Id: Copy + Eq + Hash + Send + Sync + Display + Debug + From<u64> + Into<u64>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Construct the full record from the assigned identifier and the payload.
    fn from_create(id: Self::Id, params: Self::Create) -> Self;

    /// The identifier this record was stored under.
    fn id(&self) -> Self::Id;
}

/// Returns the first counter value above every identifier in `records`.
///
/// An empty seed starts the counter at 1.
pub fn next_id_after<'a, T: Record>(records: impl IntoIterator<Item = &'a T>) -> u64 {
    records
        .into_iter()
        .map(|record| record.id().into())
        .max()
        .map_or(1, |max: u64| max + 1)
}

/// Short type label for log fields, e.g. `"User"` instead of `"directory_ledger::model::user::User"`.
pub(crate) fn record_type<T>() -> &'static str {
    std::any::type_name::<T>()
        .split("::")
        .last()
        .unwrap_or("Unknown")
}
