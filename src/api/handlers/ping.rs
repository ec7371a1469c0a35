//! Liveness probe.

/// `GET /ping`
pub async fn ping_handler() -> &'static str {
    "pong"
}
