//! Infrastructure layer for external integrations.
//!
//! This layer implements the store traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL and SQLite store implementations

pub mod persistence;
