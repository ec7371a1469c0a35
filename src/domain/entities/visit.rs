//! Visit entity representing a single served redirect.

use chrono::{DateTime, Utc};

/// An audit record written once per redirect that resolved a link.
///
/// Client metadata is optional to handle missing headers gracefully.
/// `created_at` is assigned by the store at insert time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    pub id: i64,
    pub link_id: i64,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
    pub status: i32,
    pub created_at: DateTime<Utc>,
}

/// Input data for recording a new visit.
///
/// Built by the visit-tracking middleware after the redirect status is known
/// and persisted by [`crate::domain::visit_worker::run_visit_worker`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVisit {
    pub link_id: i64,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
    pub status: i32,
}

impl NewVisit {
    /// Creates a new visit from the resolved link, the final response status
    /// and the request metadata captured before the handler ran.
    pub fn new(link_id: i64, status: u16, client: ClientInfo) -> Self {
        Self {
            link_id,
            ip: client.ip,
            user_agent: client.user_agent,
            referer: client.referer,
            status: i32::from(status),
        }
    }
}

/// Request metadata captured for a visit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientInfo {
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
}
