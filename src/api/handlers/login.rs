//! Handler for the login form submission.

use axum::{Json, extract::State};

use crate::api::dto::login::LoginResponse;
use crate::api::form::FormFields;
use crate::domain::Credentials;
use crate::error::AppError;
use crate::state::AppState;

/// Validates a login submission and acknowledges it.
///
/// # Endpoint
///
/// `POST /login`
///
/// # Request Body
///
/// Form-encoded (`application/x-www-form-urlencoded` or `multipart/form-data`):
///
/// ```text
/// email=user%40example.com&password=secret123&remember=on
/// ```
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "message": "Login successful!",
///   "user": { "email": "user@example.com" }
/// }
/// ```
///
/// # Errors
///
/// - 400 `{"error": "Invalid form data"}` if the body cannot be parsed
/// - 400 `{"error": "Invalid email address"}`
/// - 400 `{"error": "Password must be at least 6 characters"}`
///
/// No credential check is performed: any syntactically valid submission
/// succeeds.
pub async fn login_handler(
    State(state): State<AppState>,
    fields: FormFields,
) -> Result<Json<LoginResponse>, AppError> {
    let credentials = Credentials::from_form_values(
        fields.get("email"),
        fields.get("password"),
        fields.get("remember"),
    );

    let user = state.login_service.authenticate(&credentials)?;

    Ok(Json(LoginResponse::from(user)))
}
