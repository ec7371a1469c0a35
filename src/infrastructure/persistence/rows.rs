//! Row shapes shared by the SQL stores.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::domain::entities::{Link, Visit};

#[derive(Debug, FromRow)]
pub(crate) struct LinkRow {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link::new(row.id, row.original_url, row.short_code)
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct VisitRow {
    pub id: i64,
    pub link_id: i64,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
    pub status: i32,
    pub created_at: DateTime<Utc>,
}

impl From<VisitRow> for Visit {
    fn from(row: VisitRow) -> Self {
        Visit {
            id: row.id,
            link_id: row.link_id,
            ip: row.ip,
            user_agent: row.user_agent,
            referer: row.referer,
            status: row.status,
            created_at: row.created_at,
        }
    }
}
