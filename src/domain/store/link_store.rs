//! Store trait for link records.

use crate::domain::entities::{Link, NewLink};
use crate::domain::store::StoreError;
use async_trait::async_trait;

/// Durable relation of links keyed by id and by unique short code.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgStore`] - PostgreSQL
/// - [`crate::infrastructure::persistence::SqliteStore`] - SQLite
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Inserts a link in a single statement.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UniqueViolation`] if the short code is taken.
    async fn insert(&self, new_link: NewLink) -> Result<Link, StoreError>;

    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no link has this id.
    async fn get_by_id(&self, id: i64) -> Result<Link, StoreError>;

    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no link has this short code.
    async fn get_by_short_code(&self, short_code: &str) -> Result<Link, StoreError>;

    /// Replaces the URL and short code of an existing link.
    ///
    /// Setting a link's code to its current value is not a violation.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no link has this id.
    /// Returns [`StoreError::UniqueViolation`] if another link holds the code.
    async fn update(&self, id: i64, new_link: NewLink) -> Result<Link, StoreError>;

    /// Physically deletes a link.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if nothing was deleted.
    async fn delete(&self, id: i64) -> Result<(), StoreError>;

    /// Lists links in ascending id order.
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Link>, StoreError>;

    /// Counts all links.
    async fn count(&self) -> Result<i64, StoreError>;
}
