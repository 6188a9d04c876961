//! # Name Resolution
//!
//! The contract the ledger enriches orders through. Resolution is best effort: the answer is
//! either a name or an explicit [`Unresolved`] reason, never an error the caller must handle.

use crate::model::UserId;
use async_trait::async_trait;

/// Why a user's name could not be attached to an order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Unresolved {
    /// Connection refused, DNS failure, timeout, or a broken response body.
    #[error("directory unreachable: {0}")]
    Transport(String),

    /// The directory answered with anything but 200 (404 for an unknown user).
    #[error("directory answered with status {0}")]
    Status(u16),

    /// The directory answered 200 but the body was not a user record.
    #[error("directory sent an undecodable user: {0}")]
    Decode(String),
}

/// Outcome of one lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved(String),
    Unresolved(Unresolved),
}

impl Resolution {
    /// The resolved name, if there is one worth showing.
    ///
    /// An empty name counts as no name.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Resolved(name) if !name.is_empty() => Some(name),
            _ => None,
        }
    }

    pub fn into_name(self) -> Option<String> {
        match self {
            Self::Resolved(name) if !name.is_empty() => Some(name),
            _ => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}

/// Resolves a user identifier to a display name.
///
/// Implementations make one attempt per call and keep no state between calls.
#[async_trait]
pub trait NameResolver: Send + Sync {
    async fn resolve(&self, user_id: UserId) -> Resolution;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_treated_as_missing() {
        let resolution = Resolution::Resolved(String::new());
        assert!(resolution.is_resolved());
        assert_eq!(resolution.name(), None);
        assert_eq!(resolution.into_name(), None);
    }

    #[test]
    fn unresolved_has_no_name() {
        let resolution = Resolution::Unresolved(Unresolved::Status(404));
        assert!(!resolution.is_resolved());
        assert_eq!(resolution.name(), None);
    }

    #[test]
    fn resolved_name_is_returned() {
        let resolution = Resolution::Resolved("Иван Иванов".into());
        assert_eq!(resolution.name(), Some("Иван Иванов"));
    }
}
