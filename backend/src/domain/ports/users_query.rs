//! Driving port for reading users.
//!
//! HTTP handlers depend on this trait rather than on a repository so they
//! stay ignorant of persistence details and can be exercised with doubles.

use async_trait::async_trait;

use crate::domain::{Error, StoredUser, UserId};

/// Read-side use cases for the users resource.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Fetch one user, failing with a not-found error when absent.
    async fn get_user(&self, id: &UserId) -> Result<StoredUser, Error>;

    /// Fetch every stored user. An empty store yields an empty list.
    async fn list_users(&self) -> Result<Vec<StoredUser>, Error>;
}
