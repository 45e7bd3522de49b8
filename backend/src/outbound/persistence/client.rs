//! MongoDB client construction.
//!
//! One client is built at startup and shared by every request; the driver
//! manages its own connection pool internally, so this module only decides
//! where to connect and how long to wait.

use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use tracing::info;

use crate::domain::ports::UserPersistenceError;

use super::error_mapping::map_mongo_error;

/// Connection settings for the users collection.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use users_api::outbound::persistence::MongoConfig;
///
/// let config = MongoConfig::new("mongodb://localhost:27017")
///     .with_database("fastapi")
///     .with_collection("users")
///     .with_connect_timeout(Duration::from_secs(5));
/// assert_eq!(config.collection(), "users");
/// ```
#[derive(Debug, Clone)]
pub struct MongoConfig {
    uri: String,
    database: String,
    collection: String,
    connect_timeout: Duration,
}

impl MongoConfig {
    /// Create a configuration for the given connection string.
    ///
    /// Defaults: database `fastapi`, collection `users`, connect timeout of
    /// 10 seconds.
    #[must_use]
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: "fastapi".to_owned(),
            collection: "users".to_owned(),
            connect_timeout: Duration::from_secs(10),
        }
    }

    /// Set the database name.
    #[must_use]
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    /// Set the collection name.
    #[must_use]
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    /// Set the timeout applied to connection establishment and server
    /// selection.
    #[must_use]
    pub const fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Connection string.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Database name.
    #[must_use]
    pub fn database(&self) -> &str {
        &self.database
    }

    /// Collection name.
    #[must_use]
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Connect and server-selection timeout.
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }
}

/// Build a client for `config` and confirm the server answers a ping.
///
/// # Errors
///
/// Returns [`UserPersistenceError::Connection`] when the connection string
/// is invalid or the server cannot be reached within the timeout.
pub async fn connect(config: &MongoConfig) -> Result<Database, UserPersistenceError> {
    let mut options = ClientOptions::parse(config.uri())
        .await
        .map_err(|err| UserPersistenceError::connection(err.to_string()))?;
    options.app_name = Some(env!("CARGO_PKG_NAME").to_owned());
    options.connect_timeout = Some(config.connect_timeout());
    options.server_selection_timeout = Some(config.connect_timeout());

    let client = Client::with_options(options)
        .map_err(|err| UserPersistenceError::connection(err.to_string()))?;
    let database = client.database(config.database());
    database
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|err| map_mongo_error(&err))?;

    info!(database = config.database(), "connected to MongoDB");
    Ok(database)
}
