//! Users domain service.
//!
//! Implements the driving ports on top of a [`UserRepository`], translating
//! store counts into not-found outcomes and persistence failures into domain
//! errors.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use crate::domain::ports::{UserPersistenceError, UserRepository, UsersCommand, UsersQuery};
use crate::domain::{Error, StoredUser, User, UserId};

/// Message returned whenever a user cannot be located.
pub const USER_NOT_FOUND: &str = "User not found";

/// Users service implementing [`UsersQuery`] and [`UsersCommand`].
#[derive(Clone)]
pub struct UsersService<R: ?Sized> {
    repo: Arc<R>,
}

impl<R: ?Sized> UsersService<R> {
    /// Create a service over the given repository.
    #[must_use]
    pub const fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

fn user_not_found() -> Error {
    Error::not_found(USER_NOT_FOUND)
}

fn map_persistence_error(err: UserPersistenceError) -> Error {
    error!(error = %err, "user repository call failed");
    match err {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user store unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user store error: {message}"))
        }
    }
}

impl<R> UsersService<R>
where
    R: UserRepository + ?Sized,
{
    async fn load(&self, id: &UserId) -> Result<Option<StoredUser>, Error> {
        self.repo.find_by_id(id).await.map_err(map_persistence_error)
    }
}

#[async_trait]
impl<R> UsersQuery for UsersService<R>
where
    R: UserRepository + ?Sized,
{
    async fn get_user(&self, id: &UserId) -> Result<StoredUser, Error> {
        self.load(id).await?.ok_or_else(user_not_found)
    }

    async fn list_users(&self) -> Result<Vec<StoredUser>, Error> {
        self.repo.find_all().await.map_err(map_persistence_error)
    }
}

#[async_trait]
impl<R> UsersCommand for UsersService<R>
where
    R: UserRepository + ?Sized,
{
    async fn create_user(&self, user: User) -> Result<StoredUser, Error> {
        let id = self
            .repo
            .insert(&user)
            .await
            .map_err(map_persistence_error)?;
        debug!(user_id = %id, "user inserted");

        self.load(&id).await?.ok_or_else(|| {
            error!(user_id = %id, "inserted user missing on read-back");
            Error::internal(format!("user {id} missing after insert"))
        })
    }

    async fn replace_user(&self, id: &UserId, user: User) -> Result<StoredUser, Error> {
        let modified = self
            .repo
            .replace_fields(id, &user)
            .await
            .map_err(map_persistence_error)?;
        if modified != 1 {
            debug!(user_id = %id, modified, "replace matched no modifiable user");
            return Err(user_not_found());
        }

        // A concurrent delete between the write and the read-back is
        // indistinguishable from the record never having existed.
        self.load(id).await?.ok_or_else(user_not_found)
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), Error> {
        let deleted = self
            .repo
            .delete_by_id(id)
            .await
            .map_err(map_persistence_error)?;
        if deleted == 1 {
            Ok(())
        } else {
            Err(user_not_found())
        }
    }
}

#[cfg(test)]
#[path = "users_service_tests.rs"]
mod tests;
