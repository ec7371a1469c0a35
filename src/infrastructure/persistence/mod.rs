//! SQL store implementations.
//!
//! Both stores implement [`crate::domain::store::LinkStore`] and
//! [`crate::domain::store::VisitStore`] with runtime-checked queries and
//! embedded migrations.
//!
//! - [`PgStore`] - PostgreSQL, for production
//! - [`SqliteStore`] - SQLite, for local development and tests

mod rows;

pub mod pg_store;
pub mod sqlite_store;

pub use pg_store::PgStore;
pub use sqlite_store::SqliteStore;
