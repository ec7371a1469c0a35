//! DTOs for the visit endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Visit;

/// JSON representation of a visit.
#[derive(Debug, Serialize)]
pub struct VisitResponse {
    pub id: i64,
    pub link_id: i64,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
    pub status: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Visit> for VisitResponse {
    fn from(visit: Visit) -> Self {
        Self {
            id: visit.id,
            link_id: visit.link_id,
            ip: visit.ip,
            user_agent: visit.user_agent,
            referer: visit.referer,
            status: visit.status,
            created_at: visit.created_at,
        }
    }
}
