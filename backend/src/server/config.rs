//! HTTP server configuration object.

use std::sync::Arc;

use users_api::domain::ports::UserRepository;

/// Everything [`create_server`](super::create_server) needs to start.
pub struct ServerConfig {
    pub(crate) bind_addr: (String, u16),
    pub(crate) repository: Arc<dyn UserRepository>,
}

impl ServerConfig {
    /// Bind to `bind_addr` and serve users from `repository`.
    #[must_use]
    pub const fn new(bind_addr: (String, u16), repository: Arc<dyn UserRepository>) -> Self {
        Self {
            bind_addr,
            repository,
        }
    }
}
