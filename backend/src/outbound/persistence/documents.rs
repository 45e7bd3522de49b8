//! Stored document shape for the users collection.
//!
//! Documents keep the layout written by earlier deployments: an `_id` object
//! id plus `name`, `email` and a nullable `age`.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::ports::UserPersistenceError;
use crate::domain::{StoredUser, User, UserId};

/// User fields as written to the collection.
///
/// Used both as the insert payload (the store adds `_id`) and as the `$set`
/// body of a full replace. `age` is always written, as `null` when absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct UserFieldsDocument<'a> {
    pub(crate) name: &'a str,
    pub(crate) email: &'a str,
    pub(crate) age: Option<i64>,
}

impl<'a> From<&'a User> for UserFieldsDocument<'a> {
    fn from(user: &'a User) -> Self {
        Self {
            name: &user.name,
            email: &user.email,
            age: user.age,
        }
    }
}

/// A user document as read back from the collection.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct UserDocument {
    #[serde(rename = "_id")]
    pub(crate) id: ObjectId,
    pub(crate) name: String,
    pub(crate) email: String,
    #[serde(default)]
    pub(crate) age: Option<i64>,
}

impl From<UserDocument> for StoredUser {
    fn from(document: UserDocument) -> Self {
        Self::new(
            UserId::from(document.id),
            User::new(document.name, document.email, document.age),
        )
    }
}

/// Serialise user fields into a BSON document.
pub(crate) fn fields_document(user: &User) -> Result<mongodb::bson::Document, UserPersistenceError> {
    mongodb::bson::to_document(&UserFieldsDocument::from(user))
        .map_err(|err| UserPersistenceError::query(format!("failed to encode user: {err}")))
}
