//! Domain primitives, ports, and services.
//!
//! Purpose: define the user model and the use cases exposed to inbound
//! adapters, independent of HTTP framing and of the document store driver.
//!
//! Public surface:
//! - `User`, `StoredUser`, `UserId`: the users resource.
//! - `Error`, `ErrorCode`: transport-agnostic failures.
//! - `TraceId`: request correlation identifier.
//! - `UsersService`: implementation of the `ports::UsersQuery` and
//!   `ports::UsersCommand` driving ports.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
mod users_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{StoredUser, User, UserId, UserIdError};
pub use self::users_service::{USER_NOT_FOUND, UsersService};
