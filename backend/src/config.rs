//! Service configuration loaded via OrthoConfig.
//!
//! Values come from `USERS_API_*` environment variables, command-line flags
//! or a configuration file. Every field is optional; accessors apply the
//! defaults.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::MongoConfig;

const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";
const DEFAULT_DATABASE: &str = "fastapi";
const DEFAULT_COLLECTION: &str = "users";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 10_000;

/// Runtime settings for the users service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USERS_API")]
pub struct AppSettings {
    /// Document store connection string.
    pub mongodb_uri: Option<String>,
    /// Database holding the users collection.
    pub database: Option<String>,
    /// Collection storing user documents.
    pub collection: Option<String>,
    /// Interface the HTTP listener binds to.
    pub host: Option<String>,
    /// Port the HTTP listener binds to.
    pub port: Option<u16>,
    /// Store connection and server-selection timeout in milliseconds.
    pub connect_timeout_ms: Option<u64>,
    /// Serve from a process-local store instead of connecting to MongoDB.
    #[ortho_config(default = false)]
    pub in_memory: bool,
}

impl AppSettings {
    /// Connection string, falling back to a local server.
    #[must_use]
    pub fn mongodb_uri(&self) -> &str {
        self.mongodb_uri.as_deref().unwrap_or(DEFAULT_MONGODB_URI)
    }

    /// Database name, falling back to `fastapi`.
    #[must_use]
    pub fn database(&self) -> &str {
        self.database.as_deref().unwrap_or(DEFAULT_DATABASE)
    }

    /// Collection name, falling back to `users`.
    #[must_use]
    pub fn collection(&self) -> &str {
        self.collection.as_deref().unwrap_or(DEFAULT_COLLECTION)
    }

    /// Listener address as a `(host, port)` pair.
    #[must_use]
    pub fn bind_address(&self) -> (String, u16) {
        (
            self.host.clone().unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }

    /// Store connect timeout.
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms.unwrap_or(DEFAULT_CONNECT_TIMEOUT_MS))
    }

    /// Driver settings derived from these values.
    #[must_use]
    pub fn mongo_config(&self) -> MongoConfig {
        MongoConfig::new(self.mongodb_uri())
            .with_database(self.database())
            .with_collection(self.collection())
            .with_connect_timeout(self.connect_timeout())
    }
}
