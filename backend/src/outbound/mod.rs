//! Outbound adapters implementing domain ports.
//!
//! - **persistence**: MongoDB-backed user repository.
//! - **memory**: in-process user repository used by tests and local runs.
//!
//! Adapters translate between domain types and storage representations and
//! hold no business rules.

pub mod memory;
pub mod persistence;
