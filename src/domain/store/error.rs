//! Errors reported by store implementations.

use thiserror::Error;

/// Failure of a store operation.
///
/// A uniqueness violation is reported distinctly so callers can turn it into
/// a conflict instead of a server error.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unique constraint violated")]
    UniqueViolation,

    #[error("record not found")]
    NotFound,

    #[error("store unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),

    #[error("store query failed: {0}")]
    Query(#[source] sqlx::Error),
}

impl StoreError {
    /// Whether retrying the same operation later may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, StoreError::Unavailable(_))
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        if matches!(e, sqlx::Error::RowNotFound) {
            return StoreError::NotFound;
        }

        if e
            .as_database_error()
            .is_some_and(|db| db.is_unique_violation())
        {
            return StoreError::UniqueViolation;
        }

        if matches!(
            e,
            sqlx::Error::Io(_)
                | sqlx::Error::Tls(_)
                | sqlx::Error::PoolTimedOut
                | sqlx::Error::PoolClosed
                | sqlx::Error::WorkerCrashed
        ) {
            return StoreError::Unavailable(e);
        }

        StoreError::Query(e)
    }
}
