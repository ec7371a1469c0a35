//! Public base URL derivation for `short_url` fields.

use axum::http::{HeaderMap, header};

/// Returns the base URL short links are served from, without a trailing slash.
///
/// A configured base wins. Otherwise the scheme is `https` when
/// `X-Forwarded-Proto: https` is present (else `http`) and the authority is the
/// `Host` header, defaulting to `localhost`.
pub fn resolve_base_url(configured: Option<&str>, headers: &HeaderMap) -> String {
    if let Some(base) = configured {
        return base.trim_end_matches('/').to_string();
    }

    let scheme = match headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
    {
        Some(proto) if proto.eq_ignore_ascii_case("https") => "https",
        _ => "http",
    };

    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .filter(|h| !h.is_empty())
        .unwrap_or("localhost");

    format!("{scheme}://{host}")
}

/// Builds the public redirect URL for a short code.
pub fn short_url(base: &str, short_code: &str) -> String {
    format!("{base}/r/{short_code}")
}
