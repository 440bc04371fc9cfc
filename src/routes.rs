//! Top-level router configuration combining page, API and static routes.
//!
//! # Route Structure
//!
//! - `GET  /`          - Login page
//! - `POST /login`     - Login form submission
//! - `/static/*`       - Static assets
//!
//! Wrong methods on `/` and `/login` answer 405; unknown paths answer 404.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use std::path::Path;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory served under `/static`
pub fn app_router(state: AppState, static_dir: impl AsRef<Path>) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, static_dir))
}

/// Routes and tracing without path normalization.
///
/// Normalization has to wrap the router from the outside to run before
/// route matching, so it is applied separately in [`app_router`].
pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .merge(web::routes::public_routes())
        .merge(api::routes::public_routes())
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .with_state(state)
        .layer(tracing::layer())
}
