//! Error types for panel-db.
//!
//! `DatabaseError` covers the store itself. `AccessError` is what the
//! authorization-aware operations return to callers.

use panel_core::errors::CoreError;
use panel_core::policy::Denial;
use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed or a row could not be parsed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Invalid state encountered (e.g., bad data in DB).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// A uniqueness constraint rejected the write.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Errors from the authorization-aware interview operations.
///
/// All are terminal for the request.
#[derive(Debug, Error)]
pub enum AccessError {
    /// No verified caller identity where one is required.
    #[error("Unauthorized")]
    Unauthorized,

    /// Caller identity present but fails the operation's participant rule.
    #[error("Forbidden")]
    Forbidden,

    /// The referenced interview does not exist.
    #[error("Not found: interview {id}")]
    NotFound { id: String },

    /// Input rejected before reaching the store.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl From<Denial> for AccessError {
    fn from(denial: Denial) -> Self {
        match denial {
            Denial::Unauthenticated => Self::Unauthorized,
            Denial::NotPermitted => Self::Forbidden,
        }
    }
}

impl From<CoreError> for AccessError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(msg) => Self::Validation(msg),
            CoreError::Other(e) => Self::Database(DatabaseError::Other(e)),
        }
    }
}

impl From<libsql::Error> for AccessError {
    fn from(error: libsql::Error) -> Self {
        Self::Database(DatabaseError::LibSql(error))
    }
}
