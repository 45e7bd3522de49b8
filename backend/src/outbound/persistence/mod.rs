//! MongoDB persistence adapter.
//!
//! - **Thin adapter**: [`MongoUserRepository`] only translates between BSON
//!   documents and domain types; the "zero modified means not found" rule
//!   lives in the domain service.
//! - **Internal documents**: document structs (`documents.rs`) never leave
//!   this module.
//! - **Typed errors**: driver errors are classified into
//!   `UserPersistenceError` variants (`error_mapping.rs`).
//!
//! # Example
//!
//! ```no_run
//! use users_api::outbound::persistence::{MongoConfig, MongoUserRepository, connect};
//!
//! # async fn run() -> Result<(), users_api::domain::ports::UserPersistenceError> {
//! let config = MongoConfig::new("mongodb://localhost:27017");
//! let database = connect(&config).await?;
//! let repo = MongoUserRepository::new(&database, config.collection());
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

mod client;
mod documents;
mod error_mapping;
mod mongo_user_repository;

pub use client::{MongoConfig, connect};
pub use mongo_user_repository::MongoUserRepository;
