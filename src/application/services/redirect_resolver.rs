//! Short code lookup for redirects.

use std::sync::Arc;

use crate::domain::entities::Link;
use crate::domain::store::LinkStore;
use crate::error::AppError;

/// Resolves a short code to the link it redirects to.
pub struct RedirectResolver<S: LinkStore + ?Sized> {
    store: Arc<S>,
}

impl<S: LinkStore + ?Sized> RedirectResolver<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    pub async fn resolve(&self, short_code: &str) -> Result<Link, AppError> {
        Ok(self.store.get_by_short_code(short_code).await?)
    }
}
