//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`Link`] - A shortened URL mapping
//! - [`Visit`] - One served redirect
//! - [`Page`] / [`RangeParam`] - Range-based pagination over either collection
//!
//! Creation inputs live in separate structs (`NewLink`, `NewVisit`).

pub mod link;
pub mod page;
pub mod visit;

pub use link::{Link, NewLink};
pub use page::{Page, RangeParam};
pub use visit::{ClientInfo, NewVisit, Visit};
