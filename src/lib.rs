//! # Login Screen
//!
//! A minimal login page server built with Axum.
//!
//! It renders a login page from templates compiled at startup and accepts the
//! login form through a stub handler. The handler checks only the shape of the
//! submitted email and the length of the password, then reports success.
//! There is no credential store, session, or persistence.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Credentials and their format rules
//! - **Application Layer** ([`application`]) - Login acknowledgement service
//! - **Infrastructure Layer** ([`infrastructure`]) - Template store
//! - **API Layer** ([`api`]) - Form extraction, JSON handlers, middleware
//! - **Web Layer** ([`web`]) - HTML pages
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run
//! # then open http://localhost:8080/
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LoginService;
    pub use crate::domain::{Credentials, LoginRejection};
    pub use crate::error::AppError;
    pub use crate::infrastructure::TemplateStore;
    pub use crate::state::AppState;
}
