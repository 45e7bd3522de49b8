//! In-process user store.
//!
//! [`InMemoryUserRepository`] mirrors the document store's observable
//! behaviour closely enough to stand in for it: identifiers are object ids
//! minted on insert, records iterate in insertion order, and a replace that
//! writes identical values reports zero modified records.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{StoredUser, User, UserId};

/// Thread-safe in-memory implementation of [`UserRepository`].
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    records: RwLock<Vec<StoredUser>>,
}

impl InMemoryUserRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<StoredUser>>, UserPersistenceError> {
        self.records
            .read()
            .map_err(|_| UserPersistenceError::query("in-memory store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<StoredUser>>, UserPersistenceError> {
        self.records
            .write()
            .map_err(|_| UserPersistenceError::query("in-memory store lock poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &User) -> Result<UserId, UserPersistenceError> {
        let id = UserId::generate();
        self.write()?.push(StoredUser::new(id, user.clone()));
        Ok(id)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<StoredUser>, UserPersistenceError> {
        Ok(self.read()?.iter().find(|record| record.id == *id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<StoredUser>, UserPersistenceError> {
        Ok(self.read()?.clone())
    }

    async fn replace_fields(&self, id: &UserId, user: &User) -> Result<u64, UserPersistenceError> {
        let mut records = self.write()?;
        match records.iter_mut().find(|record| record.id == *id) {
            Some(record) if record.user != *user => {
                record.user = user.clone();
                Ok(1)
            }
            _ => Ok(0),
        }
    }

    async fn delete_by_id(&self, id: &UserId) -> Result<u64, UserPersistenceError> {
        let mut records = self.write()?;
        let before = records.len();
        records.retain(|record| record.id != *id);
        Ok(u64::from(records.len() < before))
    }
}
