//! API route configuration.

use crate::api::handlers::{login_handler, method_not_allowed_handler};
use crate::state::AppState;
use axum::{Router, routing::post};

/// Public API routes.
///
/// # Endpoints
///
/// - `POST /login` - Login form submission (any other method: 405)
pub fn public_routes() -> Router<AppState> {
    Router::new().route(
        "/login",
        post(login_handler).fallback(method_not_allowed_handler),
    )
}
