//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /r/{code}` - Short link redirect, with visit tracking
//! - `GET  /ping`     - Liveness probe
//! - `/api/*`         - Link and visit resources
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Visit tracking** - Post-response visit recording on the redirect route
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{ping_handler, redirect_handler};
use crate::api::middleware::{tracing, visit_tracking};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// Routes and middleware without path normalization.
pub fn router(state: AppState) -> Router {
    let redirect_router = Router::new()
        .route("/r/{code}", get(redirect_handler))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            visit_tracking::track_visit,
        ));

    Router::new()
        .merge(redirect_router)
        .route("/ping", get(ping_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(tracing::layer())
}
