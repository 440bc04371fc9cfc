//! HTTP server initialization and runtime setup.
//!
//! Handles template loading, router construction, and the Axum server lifecycle.

use crate::config::Config;
use crate::infrastructure::TemplateStore;
use crate::routes::app_router;
use crate::state::AppState;
use crate::web::handlers::LOGIN_TEMPLATE;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Template store (every `*.html` in `config.template_dir`)
/// - Application state and router
/// - Axum HTTP server, until Ctrl-C or SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - Templates cannot be read or fail to compile
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let templates = TemplateStore::load(&config.template_dir).with_context(|| {
        format!(
            "Failed to load templates from {}",
            config.template_dir.display()
        )
    })?;
    tracing::info!(templates = ?templates.names(), "Templates loaded");
    if !templates.contains(LOGIN_TEMPLATE) {
        tracing::warn!(
            "Template '{}' not found in {}; GET / will answer 500",
            LOGIN_TEMPLATE,
            config.template_dir.display()
        );
    }

    let state = AppState::new(Arc::new(templates));
    let app = app_router(state, &config.static_dir);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
