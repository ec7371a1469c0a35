//! Store trait definitions for the domain layer.
//!
//! These traits are the only operations the core requires of persistence.
//! Concrete stores live in `crate::infrastructure::persistence`; uniqueness
//! of short codes is enforced there, transactionally.
//!
//! - [`LinkStore`] - Link CRUD, listing and counting
//! - [`VisitStore`] - Visit recording and listing

pub mod error;
pub mod link_store;
pub mod visit_store;

pub use error::StoreError;
pub use link_store::LinkStore;
pub use visit_store::VisitStore;

#[cfg(test)]
pub use link_store::MockLinkStore;
#[cfg(test)]
pub use visit_store::MockVisitStore;
