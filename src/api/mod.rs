//! JSON API layer for form submissions.
//!
//! # Modules
//!
//! - [`dto`] - Response bodies
//! - [`form`] - Form field extraction
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod form;
pub mod handlers;
pub mod middleware;
pub mod routes;
