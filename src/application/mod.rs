//! Application layer services implementing business logic.
//!
//! Services consume the store traits from [`crate::domain::store`] through
//! constructor-injected handles, so they can be exercised without a database.
//!
//! # Available Services
//!
//! - [`services::LinkDirectory`] - Link CRUD, listing and short code assignment
//! - [`services::RedirectResolver`] - Short code lookup for redirects
//! - [`services::VisitRecorder`] - Non-blocking hand-off of visit events
//! - [`services::VisitService`] - Visit listing

pub mod services;
