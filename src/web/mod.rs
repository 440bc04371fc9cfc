//! Web layer for browser-facing pages.
//!
//! Pages are rendered server-side from the shared
//! [`TemplateStore`](crate::infrastructure::TemplateStore).
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
