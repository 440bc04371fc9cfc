//! HTML template rendering handlers.

mod login;

pub use login::{LOGIN_TEMPLATE, login_page_handler};
