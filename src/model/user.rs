use super::null_as_default;
use record_framework::Record;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Users. Encoded as a bare JSON integer.
///
/// Signed, because an order may name any integer as its owner. The directory only ever assigns
/// positive values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(i64::try_from(id).unwrap_or(i64::MAX))
    }
}

impl From<UserId> for u64 {
    /// Negative ids (never stored in the directory) map to 0.
    fn from(id: UserId) -> Self {
        u64::try_from(id.0).unwrap_or(0)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents a registered user in the directory.
///
/// Users are immutable once created; the directory has no update or delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

/// Payload for creating a new user.
///
/// Missing or `null` fields decode as empty strings and unknown fields (an `id` included) are
/// ignored: only the structure of the body is checked. Keys also match in `Title` and `UPPER`
/// case.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserCreate {
    #[serde(alias = "Name", alias = "NAME", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(alias = "Email", alias = "EMAIL", deserialize_with = "null_as_default")]
    pub email: String,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

impl Record for User {
    type Id = UserId;
    type Create = UserCreate;

    fn from_create(id: UserId, params: UserCreate) -> Self {
        Self {
            id,
            name: params.name,
            email: params.email,
        }
    }

    fn id(&self) -> UserId {
        self.id
    }
}

/// The two users every directory starts with.
pub fn seed_users() -> Vec<User> {
    vec![
        User::new(UserId(1), "Иван Иванов", "ivan@example.com"),
        User::new(UserId(2), "Мария Петрова", "maria@example.com"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_create_tolerates_nulls_and_capitalised_keys() {
        let params: UserCreate =
            serde_json::from_str(r#"{"Name": "Cased", "email": null}"#).unwrap();

        assert_eq!(params.name, "Cased");
        assert_eq!(params.email, "");
    }

    #[test]
    fn user_id_round_trips_through_counter() {
        assert_eq!(UserId::from(3_u64), UserId(3));
        assert_eq!(u64::from(UserId(3)), 3);
        assert_eq!(u64::from(UserId(-1)), 0);
    }
}
