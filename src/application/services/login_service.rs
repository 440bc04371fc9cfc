//! Login service: the placeholder for a real authentication backend.

use crate::domain::{Credentials, LoginRejection};

/// Identity reported back to the client after a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub email: String,
}

/// Accepts any syntactically valid credentials.
///
/// There is no credential store behind this service. A submission that passes
/// [`Credentials::validate`] is reported as a successful login; nothing is
/// persisted and no session is created.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoginService;

impl LoginService {
    pub fn new() -> Self {
        Self
    }

    /// Validates the submission and acknowledges it.
    ///
    /// # Errors
    ///
    /// Returns the first [`LoginRejection`] produced by the format rules.
    pub fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> Result<AuthenticatedUser, LoginRejection> {
        if let Err(rejection) = credentials.validate() {
            tracing::debug!(
                email = %credentials.email,
                reason = %rejection,
                "Login rejected"
            );
            return Err(rejection);
        }

        tracing::info!(
            email = %credentials.email,
            remember = credentials.remember,
            "Login attempt"
        );

        Ok(AuthenticatedUser {
            email: credentials.email.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticate_accepts_valid_credentials() {
        let service = LoginService::new();
        let creds = Credentials::from_form_values("a@b.com", "123456", "on");

        let user = service.authenticate(&creds).unwrap();

        assert_eq!(user.email, "a@b.com");
    }

    #[test]
    fn test_authenticate_ignores_password_content() {
        let service = LoginService::new();

        for password in ["123456", "wrong-password", "      "] {
            let creds = Credentials::from_form_values("a@b.com", password, "");
            assert!(service.authenticate(&creds).is_ok());
        }
    }

    #[test]
    fn test_authenticate_rejects_invalid_email() {
        let service = LoginService::new();
        let creds = Credentials::from_form_values("a@b", "123456", "");

        assert_eq!(
            service.authenticate(&creds),
            Err(LoginRejection::InvalidEmail)
        );
    }

    #[test]
    fn test_authenticate_rejects_short_password() {
        let service = LoginService::new();
        let creds = Credentials::from_form_values("a@b.com", "12345", "");

        assert_eq!(
            service.authenticate(&creds),
            Err(LoginRejection::PasswordTooShort)
        );
    }
}
