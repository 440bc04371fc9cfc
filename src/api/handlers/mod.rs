//! HTTP request handlers for API endpoints.

pub mod fallback;
pub mod login;

pub use fallback::method_not_allowed_handler;
pub use login::login_handler;
