//! Driving port for mutating users.

use async_trait::async_trait;

use crate::domain::{Error, StoredUser, User, UserId};

/// Write-side use cases for the users resource.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Persist a new user and return it as stored.
    async fn create_user(&self, user: User) -> Result<StoredUser, Error>;

    /// Replace every field of an existing user, keeping its identifier.
    ///
    /// Fails with a not-found error unless the store reports exactly one
    /// modified record, which includes the case where `user` equals the
    /// stored values.
    async fn replace_user(&self, id: &UserId, user: User) -> Result<StoredUser, Error>;

    /// Remove a user, failing with a not-found error when nothing was deleted.
    async fn delete_user(&self, id: &UserId) -> Result<(), Error>;
}
