//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` and depend only on the
//! driving ports, so they can be exercised with mocks or the in-memory store.

use std::sync::Arc;

use crate::domain::UsersService;
use crate::domain::ports::{UserRepository, UsersCommand, UsersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Read-side use cases.
    pub users_query: Arc<dyn UsersQuery>,
    /// Write-side use cases.
    pub users_command: Arc<dyn UsersCommand>,
}

impl HttpState {
    /// Bundle explicit port implementations.
    #[must_use]
    pub const fn new(users_query: Arc<dyn UsersQuery>, users_command: Arc<dyn UsersCommand>) -> Self {
        Self {
            users_query,
            users_command,
        }
    }

    /// Wire both ports to a [`UsersService`] over `repository`.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use users_api::inbound::http::state::HttpState;
    /// use users_api::outbound::memory::InMemoryUserRepository;
    ///
    /// let state = HttpState::for_repository(Arc::new(InMemoryUserRepository::new()));
    /// # let _ = state;
    /// ```
    #[must_use]
    pub fn for_repository<R>(repository: Arc<R>) -> Self
    where
        R: UserRepository + ?Sized + 'static,
    {
        let service = Arc::new(UsersService::new(repository));
        Self::new(service.clone(), service)
    }
}
