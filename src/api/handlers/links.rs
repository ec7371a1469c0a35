//! Handlers for link management endpoints.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};
use validator::Validate;

use crate::api::dto::{LinkParams, LinkResponse, RangeQuery};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::base_url::resolve_base_url;

/// Creates a link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// { "original_url": "https://example.com", "short_name": "example" }
/// ```
///
/// `short_name` is optional; a random code is assigned when it is absent or
/// empty.
///
/// # Errors
///
/// - 400 for a malformed body, URL or short name
/// - 422 if the short name is already used
pub async fn create_link_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<LinkParams>, JsonRejection>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    let Json(params) = payload?;
    params.validate()?;

    let link = state
        .links
        .create(params.original_url, params.short_name)
        .await?;

    let base_url = resolve_base_url(state.base_url.as_deref(), &headers);
    Ok((StatusCode::CREATED, Json(LinkResponse::new(link, &base_url))))
}

/// Lists links in ascending id order.
///
/// # Endpoint
///
/// `GET /api/links?range=[start,end]`
///
/// The page actually delivered is reported in `Content-Range`, e.g.
/// `links 5-10/20`.
pub async fn list_links_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<RangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let range = query.into_range()?;
    let page = state.links.list(range).await?;

    let content_range = page.content_range("links");
    let base_url = resolve_base_url(state.base_url.as_deref(), &headers);
    let items: Vec<LinkResponse> = page
        .items
        .into_iter()
        .map(|link| LinkResponse::new(link, &base_url))
        .collect();

    Ok(([(header::CONTENT_RANGE, content_range)], Json(items)))
}

/// `GET /api/links/{id}`
pub async fn get_link_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.links.get(&id).await?;

    let base_url = resolve_base_url(state.base_url.as_deref(), &headers);
    Ok(Json(LinkResponse::new(link, &base_url)))
}

/// Replaces a link's URL and, when given, its short name.
///
/// # Endpoint
///
/// `PUT /api/links/{id}`
///
/// # Errors
///
/// Same as [`create_link_handler`], plus 404 for an unknown id.
pub async fn update_link_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    payload: Result<Json<LinkParams>, JsonRejection>,
) -> Result<Json<LinkResponse>, AppError> {
    let Json(params) = payload?;
    params.validate()?;

    let link = state
        .links
        .update(&id, params.original_url, params.short_name)
        .await?;

    let base_url = resolve_base_url(state.base_url.as_deref(), &headers);
    Ok(Json(LinkResponse::new(link, &base_url)))
}

/// `DELETE /api/links/{id}`, answering 204 on success.
pub async fn delete_link_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.links.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
