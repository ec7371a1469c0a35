//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use url::Url;

use crate::api::middleware::visit_tracking::ResolvedLink;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /r/{code}`
///
/// # Request Flow
///
/// 1. Look up the link by short code
/// 2. Answer `302 Found` with `Location` set to the original URL
/// 3. Attach the resolved link to the response for
///    [`crate::api::middleware::visit_tracking::track_visit`]
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist and 500 if the
/// stored URL cannot be sent as a `Location` header. No visit is recorded
/// in either case.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let link = state.redirects.resolve(&code).await?;
    let location = location_header(&link.original_url)?;

    let mut response = (StatusCode::FOUND, [(header::LOCATION, location)]).into_response();
    response.extensions_mut().insert(ResolvedLink(link));

    Ok(response)
}

/// Uses the stored URL as is when it is a valid header value, otherwise its
/// percent-encoded serialization (e.g. for non-ASCII paths).
fn location_header(original_url: &str) -> Result<HeaderValue, AppError> {
    if let Ok(value) = HeaderValue::from_str(original_url) {
        return Ok(value);
    }

    Url::parse(original_url)
        .ok()
        .and_then(|url| HeaderValue::from_str(url.as_str()).ok())
        .ok_or_else(|| {
            AppError::Internal(format!("stored url is not a valid location: {original_url:?}"))
        })
}
