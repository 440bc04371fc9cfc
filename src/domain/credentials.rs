//! Login credentials and their format rules.
//!
//! Credentials exist only for the duration of one request. They are checked
//! for syntactic shape and never compared against any stored identity.

/// Minimum accepted password length, in bytes.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Reasons a login submission is rejected before any authentication step.
///
/// The `Display` text is the exact message returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginRejection {
    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
}

/// Credentials submitted through the login form.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub remember: bool,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .field("remember", &self.remember)
            .finish()
    }
}

impl Credentials {
    /// Builds credentials from raw form values.
    ///
    /// The email is trimmed of surrounding whitespace. The remember flag is set
    /// only when the checkbox value is exactly `on`, which is what browsers send
    /// for a checked box without an explicit `value` attribute.
    pub fn from_form_values(email: &str, password: &str, remember: &str) -> Self {
        Self {
            email: email.trim().to_string(),
            password: password.to_string(),
            remember: remember == "on",
        }
    }

    /// Applies the format rules in order; the first failing rule wins.
    ///
    /// # Errors
    ///
    /// - [`LoginRejection::InvalidEmail`] if [`is_valid_email`] fails
    /// - [`LoginRejection::PasswordTooShort`] if the password is shorter than
    ///   [`MIN_PASSWORD_LEN`] bytes
    pub fn validate(&self) -> Result<(), LoginRejection> {
        if !is_valid_email(&self.email) {
            return Err(LoginRejection::InvalidEmail);
        }

        if self.password.len() < MIN_PASSWORD_LEN {
            return Err(LoginRejection::PasswordTooShort);
        }

        Ok(())
    }
}

/// Checks the rough shape of an email address.
///
/// # Rules
///
/// 1. At least 3 bytes long
/// 2. Exactly one `@`, with a non-empty local part
/// 3. Domain part longer than 2 bytes and containing a `.`
///
/// This is intentionally loose: `a@b.c` passes, `a@b` does not.
pub fn is_valid_email(email: &str) -> bool {
    if email.len() < 3 {
        return false;
    }

    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    !local.is_empty() && domain.len() > 2 && domain.contains('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_too_short() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("ab"));
    }

    #[test]
    fn test_email_without_dotted_domain() {
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("user@localhost"));
    }

    #[test]
    fn test_email_domain_too_short() {
        assert!(!is_valid_email("a@.c"));
        assert!(!is_valid_email("abc@.c"));
    }

    #[test]
    fn test_email_requires_single_at() {
        assert!(!is_valid_email("abc.def"));
        assert!(!is_valid_email("a@b@c.com"));
    }

    #[test]
    fn test_email_requires_local_part() {
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn test_email_accepted() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last+tag@mail.example.org"));
    }

    #[test]
    fn test_password_length_boundary() {
        let short = Credentials::from_form_values("a@b.com", "12345", "");
        assert_eq!(short.validate(), Err(LoginRejection::PasswordTooShort));

        let exact = Credentials::from_form_values("a@b.com", "123456", "");
        assert_eq!(exact.validate(), Ok(()));
    }

    #[test]
    fn test_email_checked_before_password() {
        let creds = Credentials::from_form_values("ab", "1", "");
        assert_eq!(creds.validate(), Err(LoginRejection::InvalidEmail));
    }

    #[test]
    fn test_email_is_trimmed() {
        let creds = Credentials::from_form_values("  a@b.com \t", "123456", "");
        assert_eq!(creds.email, "a@b.com");
        assert!(creds.validate().is_ok());
    }

    #[test]
    fn test_password_is_not_trimmed() {
        let creds = Credentials::from_form_values("a@b.com", " 1234 ", "");
        assert_eq!(creds.password, " 1234 ");
        assert!(creds.validate().is_ok());
    }

    #[test]
    fn test_remember_flag_only_on() {
        assert!(Credentials::from_form_values("a@b.com", "123456", "on").remember);

        for value in ["", "ON", "true", "1", "yes", " on"] {
            assert!(
                !Credentials::from_form_values("a@b.com", "123456", value).remember,
                "value {value:?} must not set the remember flag"
            );
        }
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(
            LoginRejection::InvalidEmail.to_string(),
            "Invalid email address"
        );
        assert_eq!(
            LoginRejection::PasswordTooShort.to_string(),
            "Password must be at least 6 characters"
        );
    }

    #[test]
    fn test_debug_hides_password() {
        let creds = Credentials::from_form_values("a@b.com", "hunter22", "on");
        let debug = format!("{creds:?}");
        assert!(!debug.contains("hunter22"));
        assert!(debug.contains("a@b.com"));
    }
}
