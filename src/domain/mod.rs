//! Domain layer containing business entities and store contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`store`] - Persistence trait definitions
//! - [`visit_worker`] - Asynchronous visit persistence
//!
//! The domain layer has no dependencies on the HTTP or infrastructure layers.
//!
//! # Visit Processing Flow
//!
//! 1. The redirect handler resolves a link and fixes the response status
//! 2. The visit-tracking middleware enqueues a [`entities::NewVisit`]
//! 3. [`visit_worker::run_visit_worker`] persists it via [`store::VisitStore`]

pub mod entities;
pub mod store;
pub mod visit_worker;
