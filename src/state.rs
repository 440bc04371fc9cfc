//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::LoginService;
use crate::infrastructure::TemplateStore;

/// State shared by every request handler.
///
/// Built once at startup; nothing in it is mutated afterwards, so cloning is
/// a reference-count bump and handlers never lock.
#[derive(Clone, Debug)]
pub struct AppState {
    pub templates: Arc<TemplateStore>,
    pub login_service: LoginService,
}

impl AppState {
    pub fn new(templates: Arc<TemplateStore>) -> Self {
        Self {
            templates,
            login_service: LoginService::new(),
        }
    }
}
