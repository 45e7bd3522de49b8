//! User data model.
//!
//! A [`User`] is the client-supplied payload; a [`StoredUser`] pairs it with
//! the identifier the document store assigned on insert. Field values are
//! accepted as-is: presence and type are checked at the transport boundary,
//! and nothing here adds format or range rules.

use std::fmt;
use std::str::FromStr;

use bson::oid::ObjectId;

/// Failure to interpret text as a [`UserId`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserIdError {
    /// The text is not a 24-character hexadecimal object identifier.
    #[error("user id `{raw}` is not a valid object id")]
    Malformed {
        /// The rejected input.
        raw: String,
    },
}

/// Store-assigned user identifier.
///
/// Wraps the document store's native 12-byte object id and renders as its
/// 24-character lowercase hexadecimal form.
///
/// # Examples
/// ```
/// use users_api::domain::UserId;
///
/// let id: UserId = "65f1c0ffee0000000000beef".parse().expect("valid id");
/// assert_eq!(id.to_string(), "65f1c0ffee0000000000beef");
/// assert!("not-an-id".parse::<UserId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(ObjectId);

impl UserId {
    /// Generate a fresh identifier the way the store would on insert.
    #[must_use]
    pub fn generate() -> Self {
        Self(ObjectId::new())
    }

    /// Access the underlying object id.
    #[must_use]
    pub const fn as_object_id(&self) -> &ObjectId {
        &self.0
    }
}

impl From<ObjectId> for UserId {
    fn from(value: ObjectId) -> Self {
        Self(value)
    }
}

impl From<UserId> for ObjectId {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl FromStr for UserId {
    type Err = UserIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectId::parse_str(s)
            .map(Self)
            .map_err(|_| UserIdError::Malformed { raw: s.to_owned() })
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_hex())
    }
}

/// User fields as supplied by clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Display name; any string is accepted.
    pub name: String,
    /// Contact email; not format checked.
    pub email: String,
    /// Optional age in years.
    pub age: Option<i64>,
}

impl User {
    /// Build a user from its three fields.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: Option<i64>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age,
        }
    }
}

/// A persisted user together with its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUser {
    /// Identifier assigned once at creation.
    pub id: UserId,
    /// Current field values.
    pub user: User,
}

impl StoredUser {
    /// Pair an identifier with its field values.
    #[must_use]
    pub const fn new(id: UserId, user: User) -> Self {
        Self { id, user }
    }
}
