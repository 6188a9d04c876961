//! Pure data structures implementing the [`Record`](record_framework::Record) trait.

pub mod order;
pub mod user;

pub use order::*;
pub use user::*;

use serde::{Deserialize, Deserializer};

/// Field decoder that treats an explicit `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
