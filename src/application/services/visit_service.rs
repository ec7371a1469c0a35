//! Visit listing.

use std::sync::Arc;

use crate::domain::entities::{Page, RangeParam, Visit};
use crate::domain::store::VisitStore;
use crate::error::AppError;

/// Read access to recorded visits.
pub struct VisitService<V: VisitStore + ?Sized> {
    store: Arc<V>,
}

impl<V: VisitStore + ?Sized> VisitService<V> {
    pub fn new(store: Arc<V>) -> Self {
        Self { store }
    }

    /// Returns one page of visits in ascending id order with the total count.
    pub async fn list(&self, range: RangeParam) -> Result<Page<Visit>, AppError> {
        let (items, total) = tokio::try_join!(
            self.store.list_visits(range.limit(), range.offset()),
            self.store.count_visits()
        )?;

        Ok(Page::new(items, range, total))
    }
}
