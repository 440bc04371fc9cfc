//! Infrastructure layer for filesystem-backed resources.
//!
//! # Modules
//!
//! - [`templates`] - Page templates compiled once at startup

pub mod templates;

pub use templates::{TemplateError, TemplateStore};
