//! Method fallback shared by all routes.

use crate::error::AppError;

/// Rejects a request whose path matched but whose method did not.
pub async fn method_not_allowed_handler() -> AppError {
    AppError::MethodNotAllowed
}
