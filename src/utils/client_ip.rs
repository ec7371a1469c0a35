//! Client address extraction for visit records.

use axum::http::HeaderMap;
use std::net::IpAddr;

/// Headers consulted for the client address, in priority order.
///
/// `HeaderMap` lookups are case-insensitive, so every spelling of a header
/// name resolves to the same entry.
pub const CLIENT_IP_HEADERS: [&str; 2] = ["x-forwarded-for", "x-real-ip"];

/// Returns the client address for a request.
///
/// Takes the first non-empty value among [`CLIENT_IP_HEADERS`]; for
/// `X-Forwarded-For` that is the leftmost (originating) entry. Falls back to
/// the transport peer address when no header is present.
pub fn extract_client_ip(headers: &HeaderMap, peer: Option<IpAddr>) -> Option<String> {
    CLIENT_IP_HEADERS
        .iter()
        .find_map(|name| forwarded_value(headers, name))
        .or_else(|| peer.map(|ip| ip.to_string()))
}

fn forwarded_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let value = headers.get(name)?.to_str().ok()?;
    let first = value.split(',').next()?.trim();

    (!first.is_empty()).then(|| first.to_string())
}
