//! Store trait for visit records.

use crate::domain::entities::{NewVisit, Visit};
use crate::domain::store::StoreError;
use async_trait::async_trait;

/// Append-only relation of visits.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitStore: Send + Sync {
    /// Records a visit; the store assigns `id` and `created_at`.
    async fn insert_visit(&self, new_visit: NewVisit) -> Result<Visit, StoreError>;

    /// Lists visits in ascending id order.
    async fn list_visits(&self, limit: i64, offset: i64) -> Result<Vec<Visit>, StoreError>;

    /// Counts all visits.
    async fn count_visits(&self) -> Result<i64, StoreError>;
}
