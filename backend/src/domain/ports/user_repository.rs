//! Driven port for user persistence.
//!
//! Adapters wrap a single document collection. Counts returned by the
//! mutating operations follow document-store semantics: `replace_fields`
//! reports how many records were *modified*, so writing values identical to
//! the stored ones yields `0` even though the record exists.

use async_trait::async_trait;

use crate::domain::{StoredUser, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// The store could not be reached or timed out.
        Connection {
            /// Driver-reported cause.
            message: String,
        } => "user repository connection failed: {message}",
        /// A query or mutation failed, or a stored document was unreadable.
        Query {
            /// Driver-reported cause.
            message: String,
        } => "user repository query failed: {message}",
    }
}

/// Persistence port over the users collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new record and return the identifier the store assigned.
    async fn insert(&self, user: &User) -> Result<UserId, UserPersistenceError>;

    /// Fetch a record by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<StoredUser>, UserPersistenceError>;

    /// Fetch every record in the store's natural iteration order.
    async fn find_all(&self) -> Result<Vec<StoredUser>, UserPersistenceError>;

    /// Overwrite all user fields of the matching record.
    ///
    /// Returns the number of records modified (`0` or `1`).
    async fn replace_fields(&self, id: &UserId, user: &User) -> Result<u64, UserPersistenceError>;

    /// Delete the matching record, returning the number removed (`0` or `1`).
    async fn delete_by_id(&self, id: &UserId) -> Result<u64, UserPersistenceError>;
}
