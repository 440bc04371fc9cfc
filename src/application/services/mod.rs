//! Business logic services for the application layer.

pub mod login_service;

pub use login_service::{AuthenticatedUser, LoginService};
