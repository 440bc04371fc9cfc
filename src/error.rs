//! Request-level error type and its HTTP mapping.
//!
//! | Variant            | Status | Body                                   |
//! |--------------------|--------|----------------------------------------|
//! | `MethodNotAllowed` | 405    | `Method not allowed` (text)            |
//! | `InvalidForm`      | 400    | `{"error": "Invalid form data"}`       |
//! | `Validation`       | 400    | `{"error": "<rejection message>"}`     |
//! | `Render`           | 500    | `Internal server error` (text, logged) |

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::api::form::FormError;
use crate::domain::LoginRejection;
use crate::infrastructure::TemplateError;

/// JSON body for client errors.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Invalid form data")]
    InvalidForm(#[from] FormError),

    #[error(transparent)]
    Validation(#[from] LoginRejection),

    #[error(transparent)]
    Render(#[from] TemplateError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::MethodNotAllowed => {
                plain_text(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
            }
            AppError::InvalidForm(err) => {
                tracing::debug!(error = %err, "Rejected unparsable form");
                json_error(StatusCode::BAD_REQUEST, "Invalid form data")
            }
            AppError::Validation(rejection) => {
                json_error(StatusCode::BAD_REQUEST, rejection.to_string())
            }
            AppError::Render(err) => {
                tracing::error!(error = %err, "Template execution error");
                plain_text(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

/// Writes `{"error": message}` with the given status.
pub fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    json_response(
        status,
        ErrorBody {
            error: message.into(),
        },
    )
}

/// Serializes `payload` as the JSON body of a response with the given status.
pub fn json_response<T: Serialize>(status: StatusCode, payload: T) -> Response {
    (status, Json(payload)).into_response()
}

/// Plain-text error body, terminated by a newline.
fn plain_text(status: StatusCode, message: &str) -> Response {
    (
        status,
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
        ],
        format!("{message}\n"),
    )
        .into_response()
}
