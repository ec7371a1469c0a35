//! PostgreSQL implementation of the link and visit stores.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::migrate::MigrateError;
use sqlx::postgres::PgPoolOptions;

use super::rows::{LinkRow, VisitRow};
use crate::domain::entities::{Link, NewLink, NewVisit, Visit};
use crate::domain::store::{LinkStore, StoreError, VisitStore};

const LINK_COLUMNS: &str = "id, original_url, short_code";
const VISIT_COLUMNS: &str = "id, link_id, ip, user_agent, referer, status, created_at";

/// PostgreSQL store for links and visits.
///
/// Short code uniqueness is enforced by the `links.short_code` unique
/// constraint and reported as [`StoreError::UniqueViolation`].
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a connection pool.
    pub async fn connect(
        database_url: &str,
        max_connections: u32,
        acquire_timeout: Duration,
    ) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(acquire_timeout)
            .connect(database_url)
            .await?;

        Ok(Self::new(pool))
    }

    /// Applies the embedded schema migrations.
    pub async fn migrate(&self) -> Result<(), MigrateError> {
        sqlx::migrate!("./migrations/postgres").run(&self.pool).await
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl LinkStore for PgStore {
    async fn insert(&self, new_link: NewLink) -> Result<Link, StoreError> {
        let row = sqlx::query_as::<_, LinkRow>(&format!(
            "INSERT INTO links (original_url, short_code) VALUES ($1, $2) RETURNING {LINK_COLUMNS}"
        ))
        .bind(&new_link.original_url)
        .bind(&new_link.short_code)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn get_by_id(&self, id: i64) -> Result<Link, StoreError> {
        let row = sqlx::query_as::<_, LinkRow>(&format!(
            "SELECT {LINK_COLUMNS} FROM links WHERE id = $1"
        ))
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn get_by_short_code(&self, short_code: &str) -> Result<Link, StoreError> {
        let row = sqlx::query_as::<_, LinkRow>(&format!(
            "SELECT {LINK_COLUMNS} FROM links WHERE short_code = $1"
        ))
        .bind(short_code)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn update(&self, id: i64, new_link: NewLink) -> Result<Link, StoreError> {
        let row = sqlx::query_as::<_, LinkRow>(&format!(
            "UPDATE links SET original_url = $1, short_code = $2 WHERE id = $3 RETURNING {LINK_COLUMNS}"
        ))
        .bind(&new_link.original_url)
        .bind(&new_link.short_code)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM links WHERE id = $1")
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
            "SELECT {LINK_COLUMNS} FROM links ORDER BY id ASC LIMIT $1 OFFSET $2"
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
impl VisitStore for PgStore {
    async fn insert_visit(&self, new_visit: NewVisit) -> Result<Visit, StoreError> {
        let row = sqlx::query_as::<_, VisitRow>(&format!(
            "INSERT INTO link_visits (link_id, ip, user_agent, referer, status) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {VISIT_COLUMNS}"
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
            "SELECT {VISIT_COLUMNS} FROM link_visits ORDER BY id ASC LIMIT $1 OFFSET $2"
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
