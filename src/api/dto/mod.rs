//! Data Transfer Objects for API requests and responses.
//!
//! DTOs handle serialization, request validation and query parsing.

pub mod link;
pub mod pagination;
pub mod visit;

pub use link::{LinkParams, LinkResponse};
pub use pagination::{RangeQuery, parse_range};
pub use visit::VisitResponse;
