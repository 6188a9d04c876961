//! # Mock Resolver
//!
//! A [`NameResolver`] that answers from a list of expectations instead of the network, for
//! testing the ledger without a running user service.
//!
//! ## When to use the mock vs a real directory
//!
//! | Feature | MockResolver | HttpNameResolver + user service |
//! |---------|--------------|--------------------------------|
//! | **Speed** | Instant (in-memory) | Binds a socket per test |
//! | **Determinism** | 100% Deterministic | Subject to the network stack |
//! | **Failure injection** | `return_unresolved(..)` | Needs a dead port or a stalled listener |
//! | **Call accounting** | [`MockResolver::requested`] | None |
//!
//! ## Example
//! ```rust
//! use directory_ledger::clients::{MockResolver, NameResolver, Unresolved};
//! use directory_ledger::model::UserId;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let mock = MockResolver::new();
//! mock.expect_resolve(UserId(1)).return_name("Alice");
//! mock.expect_resolve(UserId(2)).return_unresolved(Unresolved::Status(404));
//!
//! assert_eq!(mock.resolve(UserId(1)).await.name(), Some("Alice"));
//! assert_eq!(mock.resolve(UserId(2)).await.name(), None);
//!
//! mock.verify(); // every expectation was used
//! assert_eq!(mock.requested(), vec![UserId(1), UserId(2)]);
//! # }
//! ```

use crate::clients::{NameResolver, Resolution, Unresolved};
use crate::model::UserId;
use async_trait::async_trait;
use std::sync::{Arc, Mutex, PoisonError};

struct Expectation {
    user_id: UserId,
    resolution: Resolution,
}

/// A resolver with expectation tracking for fluent testing.
///
/// Each expectation answers exactly one `resolve` call for its user id. Calls are matched to the
/// first unused expectation with the same id, so tests do not depend on the order in which a
/// list of orders comes back. A call with no matching expectation panics.
#[derive(Clone, Default)]
pub struct MockResolver {
    expectations: Arc<Mutex<Vec<Expectation>>>,
    requested: Arc<Mutex<Vec<UserId>>>,
}

impl MockResolver {
    /// Creates a mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects one `resolve(user_id)` call.
    pub fn expect_resolve(&self, user_id: UserId) -> ResolveExpectationBuilder {
        ResolveExpectationBuilder {
            user_id,
            expectations: self.expectations.clone(),
        }
    }

    /// Every user id passed to `resolve`, in call order.
    pub fn requested(&self) -> Vec<UserId> {
        self.requested
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Panics unless every expectation was consumed.
    pub fn verify(&self) {
        let remaining = self
            .expectations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

#[async_trait]
impl NameResolver for MockResolver {
    async fn resolve(&self, user_id: UserId) -> Resolution {
        self.requested
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(user_id);

        let mut expectations = self
            .expectations
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        match expectations.iter().position(|exp| exp.user_id == user_id) {
            Some(index) => expectations.remove(index).resolution,
            None => panic!("Unexpected resolve({user_id})"),
        }
    }
}

/// Builder for `resolve` expectations.
pub struct ResolveExpectationBuilder {
    user_id: UserId,
    expectations: Arc<Mutex<Vec<Expectation>>>,
}

impl ResolveExpectationBuilder {
    /// Answer with a resolved name.
    pub fn return_name(self, name: impl Into<String>) {
        self.push(Resolution::Resolved(name.into()));
    }

    /// Answer with an unresolved outcome.
    pub fn return_unresolved(self, reason: Unresolved) {
        self.push(Resolution::Unresolved(reason));
    }

    fn push(self, resolution: Resolution) {
        self.expectations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Expectation {
                user_id: self.user_id,
                resolution,
            });
    }
}
