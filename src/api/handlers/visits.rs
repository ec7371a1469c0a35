//! Handler for the visit listing endpoint.

use axum::{
    Json,
    extract::{Query, State},
    http::header,
    response::IntoResponse,
};

use crate::api::dto::{RangeQuery, VisitResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists recorded visits in ascending id order.
///
/// # Endpoint
///
/// `GET /api/link_visits?range=[start,end]`
///
/// Reports the delivered page in `Content-Range`, e.g. `visits 0-9/42`.
pub async fn list_visits_handler(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let range = query.into_range()?;
    let page = state.visits.list(range).await?;

    let content_range = page.content_range("visits");
    let items: Vec<VisitResponse> = page.items.into_iter().map(VisitResponse::from).collect();

    Ok(([(header::CONTENT_RANGE, content_range)], Json(items)))
}
