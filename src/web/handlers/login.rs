//! Login page handler.

use axum::{extract::State, response::Html};
use minijinja::context;

use crate::error::AppError;
use crate::state::AppState;

/// Name of the login page template inside the template directory.
pub const LOGIN_TEMPLATE: &str = "login.html";

/// Renders the login page.
///
/// # Endpoint
///
/// `GET /`
///
/// # Template
///
/// Renders `login.html` from the template store with no data. The page posts
/// its form to `POST /login` from `static/js/app.js`.
///
/// # Errors
///
/// Returns [`AppError::Render`] (500) if the template is missing or fails to
/// render.
pub async fn login_page_handler(
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    let page = state.templates.render(LOGIN_TEMPLATE, context! {})?;
    Ok(Html(page))
}
