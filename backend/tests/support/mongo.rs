//! Helpers for tests that need a live MongoDB server.
//!
//! Set `USERS_API_TEST_MONGODB_URI` to run them. When it is unset the tests
//! print a skip marker and pass, unless `USERS_API_REQUIRE_MONGODB` is truthy,
//! in which case they fail so CI breakage is not masked.

use std::time::Duration;

use mongodb::Database;
use users_api::outbound::persistence::{MongoConfig, connect};
use uuid::Uuid;

const URI_VAR: &str = "USERS_API_TEST_MONGODB_URI";
const REQUIRE_VAR: &str = "USERS_API_REQUIRE_MONGODB";

fn is_truthy(name: &str) -> bool {
    std::env::var(name)
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

fn handle_unavailable<T>(reason: impl std::fmt::Display) -> Option<T> {
    if is_truthy(REQUIRE_VAR) {
        panic!("MongoDB unavailable: {reason}. Unset {REQUIRE_VAR} to skip.");
    }
    eprintln!("SKIP-MONGODB: {reason}");
    None
}

/// Database handle scoped to a single test, dropped by [`TestDatabase::cleanup`].
pub struct TestDatabase {
    pub config: MongoConfig,
    pub database: Database,
}

impl TestDatabase {
    /// Connect to a freshly named database, or skip.
    pub async fn connect() -> Option<Self> {
        let uri = match std::env::var(URI_VAR) {
            Ok(uri) if !uri.trim().is_empty() => uri,
            _ => return handle_unavailable(format!("{URI_VAR} is not set")),
        };
        let name = format!("users_api_test_{}", Uuid::new_v4().simple());
        let config = MongoConfig::new(uri)
            .with_database(name)
            .with_connect_timeout(Duration::from_secs(5));
        match connect(&config).await {
            Ok(database) => Some(Self { config, database }),
            Err(err) => handle_unavailable(err),
        }
    }

    /// Drop the per-test database.
    pub async fn cleanup(self) {
        if let Err(err) = self.database.drop().await {
            eprintln!("failed to drop test database: {err}");
        }
    }
}
