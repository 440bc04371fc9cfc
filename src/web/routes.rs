//! Web page route configuration.

use crate::api::handlers::method_not_allowed_handler;
use crate::state::AppState;
use crate::web::handlers::login_page_handler;
use axum::{Router, routing::get};

/// Public page routes.
///
/// # Endpoints
///
/// - `GET /` - Login page
///
/// Every other method on these paths, `HEAD` included, answers 405.
pub fn public_routes() -> Router<AppState> {
    Router::new().route(
        "/",
        get(login_page_handler)
            .head(method_not_allowed_handler)
            .fallback(method_not_allowed_handler),
    )
}
