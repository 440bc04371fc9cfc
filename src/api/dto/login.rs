//! DTOs for the login form endpoint.

use serde::Serialize;

use crate::application::services::AuthenticatedUser;

/// Acknowledgement returned for an accepted login submission.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub user: UserInfo,
}

/// Public view of the logged-in user.
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub email: String,
}

impl From<AuthenticatedUser> for LoginResponse {
    fn from(user: AuthenticatedUser) -> Self {
        Self {
            success: true,
            message: "Login successful!".to_string(),
            user: UserInfo { email: user.email },
        }
    }
}
