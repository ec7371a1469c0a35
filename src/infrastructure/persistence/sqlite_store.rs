//! SQLite implementation of the link and visit stores.
//!
//! Used for local development and the integration test suite; an in-memory
//! database (`sqlite::memory:`) needs no external service.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::migrate::MigrateError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use super::rows::{LinkRow, VisitRow};
use crate::domain::entities::{Link, NewLink, NewVisit, Visit};
use crate::domain::store::{LinkStore, StoreError, VisitStore};

const LINK_COLUMNS: &str = "id, original_url, short_code";
const VISIT_COLUMNS: &str = "id, link_id, ip, user_agent, referer, status, created_at";

/// SQLite store for links and visits.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens a single-connection pool, creating the database file if needed.
    ///
    /// An in-memory database lives only as long as its connection, so that
    /// connection is never recycled.
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Ok(Self::new(pool))
    }

    /// Opens a fresh in-memory database with the schema applied.
    pub async fn in_memory() -> anyhow::Result<Self> {
        let store = Self::connect("sqlite::memory:").await?;
        store.migrate().await?;
        Ok(store)
    }

    /// Applies the embedded schema migrations.
    pub async fn migrate(&self) -> Result<(), MigrateError> {
        sqlx::migrate!("./migrations/sqlite").run(&self.pool).await
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl LinkStore for SqliteStore {
    async fn insert(&self, new_link: NewLink) -> Result<Link, StoreError> {
        let row = sqlx::query_as::<_, LinkRow>(&format!(
            "INSERT INTO links (original_url, short_code) VALUES (?, ?) RETURNING {LINK_COLUMNS}"
        ))
        .bind(&new_link.original_url)
        .bind(&new_link.short_code)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn get_by_id(&self, id: i64) -> Result<Link, StoreError> {
        let row = sqlx::query_as::<_, LinkRow>(&format!(
            "SELECT {LINK_COLUMNS} FROM links WHERE id = ?"
        ))
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn get_by_short_code(&self, short_code: &str) -> Result<Link, StoreError> {
        let row = sqlx::query_as::<_, LinkRow>(&format!(
            "SELECT {LINK_COLUMNS} FROM links WHERE short_code = ?"
        ))
        .bind(short_code)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn update(&self, id: i64, new_link: NewLink) -> Result<Link, StoreError> {
        let row = sqlx::query_as::<_, LinkRow>(&format!(
            "UPDATE links SET original_url = ?, short_code = ? WHERE id = ? RETURNING {LINK_COLUMNS}"
        ))
        .bind(&new_link.original_url)
        .bind(&new_link.short_code)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM links WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Link>, StoreError> {
        let rows = sqlx::query_as::<_, LinkRow>(&format!(
            "SELECT {LINK_COLUMNS} FROM links ORDER BY id ASC LIMIT ? OFFSET ?"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[async_trait]
impl VisitStore for SqliteStore {
    async fn insert_visit(&self, new_visit: NewVisit) -> Result<Visit, StoreError> {
        let row = sqlx::query_as::<_, VisitRow>(&format!(
            "INSERT INTO link_visits (link_id, ip, user_agent, referer, status) \
             VALUES (?, ?, ?, ?, ?) RETURNING {VISIT_COLUMNS}"
        ))
        .bind(new_visit.link_id)
        .bind(&new_visit.ip)
        .bind(&new_visit.user_agent)
        .bind(&new_visit.referer)
        .bind(new_visit.status)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn list_visits(&self, limit: i64, offset: i64) -> Result<Vec<Visit>, StoreError> {
        let rows = sqlx::query_as::<_, VisitRow>(&format!(
            "SELECT {VISIT_COLUMNS} FROM link_visits ORDER BY id ASC LIMIT ? OFFSET ?"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Visit::from).collect())
    }

    async fn count_visits(&self) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM link_visits")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
