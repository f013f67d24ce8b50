//! HTTP server exposing the review pipeline.
//!
//! Endpoints:
//!   POST /review   — run a review, body is a `ReviewRequest`
//!   GET  /healthz  — liveness probe

pub mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::github::PullRequestFetcher;
use crate::review::ReviewEngine;

/// Shared, immutable per-process state. Each request builds its own
/// report from scratch; nothing here is mutated across requests.
pub struct AppState {
    pub engine: ReviewEngine,
    pub fetcher: Arc<dyn PullRequestFetcher>,
}

/// Build the application router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/review", post(handlers::review))
        .route("/healthz", get(handlers::healthz))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(addr: SocketAddr, state: Arc<AppState>) -> Result<()> {
    let router = build_router(state);

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
