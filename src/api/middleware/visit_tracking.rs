//! Post-response visit recording for the redirect route.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};

use crate::domain::entities::{ClientInfo, Link, NewVisit};
use crate::state::AppState;
use crate::utils::client_ip::extract_client_ip;

/// Link resolved by the redirect handler, carried in the response extensions.
#[derive(Debug, Clone)]
pub struct ResolvedLink(pub Link);

/// Records one visit per redirect that resolved a link.
///
/// Client metadata is captured before the handler runs. Once the handler has
/// fixed the response status, the visit is queued without waiting on the
/// store; the response is returned unchanged whatever happens to the visit.
pub async fn track_visit(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip());
    let client = client_info(request.headers(), peer);

    let response = next.run(request).await;

    if let Some(ResolvedLink(link)) = response.extensions().get::<ResolvedLink>() {
        state
            .recorder
            .record(NewVisit::new(link.id, response.status().as_u16(), client));
    }

    response
}

fn client_info(headers: &HeaderMap, peer: Option<std::net::IpAddr>) -> ClientInfo {
    ClientInfo {
        ip: extract_client_ip(headers, peer),
        user_agent: header_string(headers, header::USER_AGENT),
        referer: header_string(headers, header::REFERER),
    }
}

fn header_string(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
