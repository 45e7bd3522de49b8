//! MongoDB-backed [`UserRepository`] adapter.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{Document, doc};
use mongodb::{Collection, Database};

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{StoredUser, User, UserId};

use super::documents::{UserDocument, fields_document};
use super::error_mapping::map_mongo_error;

/// Repository over a single users collection.
///
/// The collection handle is cheap to clone and shares the client's
/// connection pool, so one instance serves all concurrent requests.
#[derive(Debug, Clone)]
pub struct MongoUserRepository {
    collection: Collection<Document>,
}

impl MongoUserRepository {
    /// Wrap the named collection of `database`.
    #[must_use]
    pub fn new(database: &Database, collection: &str) -> Self {
        Self {
            collection: database.collection(collection),
        }
    }

    fn typed(&self) -> Collection<UserDocument> {
        self.collection.clone_with_type()
    }
}

fn id_filter(id: &UserId) -> Document {
    doc! { "_id": *id.as_object_id() }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn insert(&self, user: &User) -> Result<UserId, UserPersistenceError> {
        let document = fields_document(user)?;
        let result = self
            .collection
            .insert_one(document)
            .await
            .map_err(|err| map_mongo_error(&err))?;
        result
            .inserted_id
            .as_object_id()
            .map(UserId::from)
            .ok_or_else(|| {
                UserPersistenceError::query(format!(
                    "store returned a non-object id: {}",
                    result.inserted_id
                ))
            })
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<StoredUser>, UserPersistenceError> {
        let document = self
            .typed()
            .find_one(id_filter(id))
            .await
            .map_err(|err| map_mongo_error(&err))?;
        Ok(document.map(StoredUser::from))
    }

    async fn find_all(&self) -> Result<Vec<StoredUser>, UserPersistenceError> {
        let cursor = self
            .typed()
            .find(doc! {})
            .await
            .map_err(|err| map_mongo_error(&err))?;
        let documents: Vec<UserDocument> = cursor
            .try_collect()
            .await
            .map_err(|err| map_mongo_error(&err))?;
        Ok(documents.into_iter().map(StoredUser::from).collect())
    }

    async fn replace_fields(&self, id: &UserId, user: &User) -> Result<u64, UserPersistenceError> {
        let fields = fields_document(user)?;
        let result = self
            .collection
            .update_one(id_filter(id), doc! { "$set": fields })
            .await
            .map_err(|err| map_mongo_error(&err))?;
        Ok(result.modified_count)
    }

    async fn delete_by_id(&self, id: &UserId) -> Result<u64, UserPersistenceError> {
        let result = self
            .collection
            .delete_one(id_filter(id))
            .await
            .map_err(|err| map_mongo_error(&err))?;
        Ok(result.deleted_count)
    }
}
