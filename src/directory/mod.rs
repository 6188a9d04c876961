//! # User Directory
//!
//! The Directory Store service: holds [`User`] records, assigns their identifiers and serves
//! reads. It is the simplest of the two services, a thin layer over a
//! [`RecordStore<User>`](record_framework::RecordStore) that adds logging and a domain error.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use directory_ledger::directory::UserDirectory;
//! use directory_ledger::model::{seed_users, UserCreate, UserId};
//! use record_framework::LockedStore;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let directory = UserDirectory::new(Arc::new(LockedStore::with_seed(seed_users())));
//!
//! let params = UserCreate {
//!     name: "Alice".to_string(),
//!     email: "alice@example.com".to_string(),
//! };
//! let user = directory.create(params).await?;
//! assert_eq!(user.id, UserId(3));
//! # Ok(())
//! # }
//! ```

pub mod error;

pub use error::*;

use crate::model::{User, UserCreate, UserId};
use record_framework::RecordStore;
use std::sync::Arc;
use tracing::{info, instrument};

/// Handle to the user directory. Cheap to clone; clones share one store.
#[derive(Clone)]
pub struct UserDirectory {
    store: Arc<dyn RecordStore<User>>,
}

impl UserDirectory {
    pub fn new(store: Arc<dyn RecordStore<User>>) -> Self {
        Self { store }
    }

    /// All users, in no particular order.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<User>, DirectoryError> {
        Ok(self.store.list().await?)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: UserId) -> Result<Option<User>, DirectoryError> {
        Ok(self.store.get(id).await?)
    }

    #[instrument(skip(self))]
    pub async fn create(&self, params: UserCreate) -> Result<User, DirectoryError> {
        let user = self.store.create(params).await?;
        info!(user_id = %user.id, "User created");
        Ok(user)
    }
}
