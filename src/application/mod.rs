//! Application layer services.
//!
//! Services sit between HTTP handlers and the domain rules. Handlers hand
//! them parsed input and translate their results into responses.
//!
//! # Available Services
//!
//! - [`services::login_service::LoginService`] - Login form acknowledgement

pub mod services;
