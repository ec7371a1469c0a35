//! API route configuration.

use crate::api::handlers::{
    create_link_handler, delete_link_handler, get_link_handler, list_links_handler,
    list_visits_handler, update_link_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Resource routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `GET    /links`        - List links (`?range=[start,end]`)
/// - `POST   /links`        - Create a link
/// - `GET    /links/{id}`   - Fetch a link
/// - `PUT    /links/{id}`   - Replace a link
/// - `DELETE /links/{id}`   - Delete a link
/// - `GET    /link_visits`  - List recorded visits (`?range=[start,end]`)
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/links", post(create_link_handler).get(list_links_handler))
        .route(
            "/links/{id}",
            get(get_link_handler)
                .put(update_link_handler)
                .delete(delete_link_handler),
        )
        .route("/link_visits", get(list_visits_handler))
}
