//! HTTP middleware for request processing.
//!
//! Provides request tracing and redirect visit tracking.

pub mod tracing;
pub mod visit_tracking;
