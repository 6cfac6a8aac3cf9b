//! HTTP surface: the JSON issue API and the server-rendered issue board.

mod api;
mod pages;


use anyhow::{Context, Result};
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

use crate::issues::IssueProvider;

pub use self::api::LOAD_FAILURE_MESSAGE;

/// Shared by all handlers. The provider holds no data, only the source.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<IssueProvider>,
}

pub fn router(provider: IssueProvider) -> Router {
    let state = AppState {
        provider: Arc::new(provider),
    };

    Router::new()
        .route("/", get(pages::issue_board))
        .route("/issues", get(pages::issue_board))
        .route("/issues/{id}", get(pages::issue_detail))
        .route("/api/issues", get(api::list_issues))
        .route("/api/issues/{id}", get(api::get_issue))
        .route("/status", get(status_check))
        .with_state(state)
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(addr: SocketAddr, provider: IssueProvider) -> Result<()> {
    info!("Serving issues from {}", provider.source().describe());

    let app = router(provider);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("Server running on http://{}", addr);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if signal::ctrl_c().await.is_err() {
        error!("Failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("Ctrl-C received, shutting down");
}

async fn status_check() -> &'static str {
    "OK"
}
