//! Users API entry-point: loads settings, connects the store and serves HTTP.

mod server;

use std::io;
use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use users_api::config::AppSettings;
use users_api::domain::ports::UserRepository;
use users_api::inbound::http::health::HealthState;
use users_api::outbound::memory::InMemoryUserRepository;
use users_api::outbound::persistence::{MongoUserRepository, connect};

async fn build_repository(settings: &AppSettings) -> io::Result<Arc<dyn UserRepository>> {
    if settings.in_memory {
        warn!("serving from the in-memory user store; data is lost on exit");
        return Ok(Arc::new(InMemoryUserRepository::new()));
    }

    let mongo = settings.mongo_config();
    let database = connect(&mongo)
        .await
        .map_err(|e| io::Error::other(format!("failed to connect to user store: {e}")))?;
    info!(
        database = mongo.database(),
        collection = mongo.collection(),
        "serving users from MongoDB"
    );
    Ok(Arc::new(MongoUserRepository::new(
        &database,
        mongo.collection(),
    )))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|e| io::Error::other(format!("failed to load configuration: {e}")))?;
    let repository = build_repository(&settings).await?;

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(settings.bind_address(), repository);
    let server = create_server(&health_state, config)?;
    info!("users api started");
    server.await
}
