//! Mapping from MongoDB driver failures to user persistence errors.

use mongodb::error::{Error as MongoError, ErrorKind};
use tracing::debug;

use crate::domain::ports::UserPersistenceError;

/// Classify a driver error as a connectivity or a query failure.
///
/// Server selection, I/O, DNS and pool-cleared failures mean the store could
/// not be reached; every other kind is treated as a failed operation.
pub(crate) fn map_mongo_error(error: &MongoError) -> UserPersistenceError {
    debug!(error = %error, "mongodb operation failed");
    let message = error.to_string();
    match *error.kind {
        ErrorKind::ServerSelection { .. }
        | ErrorKind::Io(_)
        | ErrorKind::DnsResolve { .. }
        | ErrorKind::ConnectionPoolCleared { .. } => UserPersistenceError::connection(message),
        _ => UserPersistenceError::query(message),
    }
}
