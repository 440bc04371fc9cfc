#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use login_screen::infrastructure::TemplateStore;
use login_screen::routes;
use login_screen::state::AppState;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::Level;
use tracing::subscriber::DefaultGuard;

pub fn template_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates")
}

pub fn static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static")
}

/// State backed by the templates shipped with the crate.
pub fn create_test_state() -> AppState {
    let templates = TemplateStore::load(template_dir()).unwrap();
    AppState::new(Arc::new(templates))
}

/// State backed by in-memory templates.
pub fn create_state_with_templates(sources: &[(&str, &str)]) -> AppState {
    let templates = TemplateStore::from_sources(sources.iter().copied()).unwrap();
    AppState::new(Arc::new(templates))
}

pub fn create_test_router(state: AppState) -> Router {
    routes::router(state, static_dir())
}

pub fn create_test_server() -> TestServer {
    TestServer::new(create_test_router(create_test_state())).unwrap()
}

/// In-memory sink for formatted log lines.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    /// Lines whose message contains `needle`.
    pub fn lines_with(&self, needle: &str) -> Vec<String> {
        self.contents()
            .lines()
            .filter(|line| line.contains(needle))
            .map(str::to_owned)
            .collect()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Routes `INFO` and above on the current thread into a [`CapturedLogs`]
/// until the returned guard is dropped.
pub fn capture_logs() -> (CapturedLogs, DefaultGuard) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();

    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(Level::INFO)
        .with_writer(move || writer.clone())
        .finish();

    (logs, tracing::subscriber::set_default(subscriber))
}
