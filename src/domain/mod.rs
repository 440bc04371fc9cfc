//! Domain layer: login credentials and the format rules applied to them.
//!
//! Nothing here touches HTTP or the filesystem; handlers translate requests
//! into [`credentials::Credentials`] and the result back into responses.

pub mod credentials;

pub use credentials::{Credentials, LoginRejection};
