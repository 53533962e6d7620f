//! Axum server wiring for the plan service.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::cache::ResultCache;
use crate::providers::PlanGenerator;

/// Shared state for all route handlers.
#[derive(Clone)]
pub struct AppState {
    /// Completion provider behind the trait seam.
    pub provider: Arc<dyn PlanGenerator>,
    /// Result cache backend (Redis, or in-process fallback).
    pub cache: Arc<dyn ResultCache>,
    /// Expiration applied to every cached plan text.
    pub cache_ttl_secs: u64,
}

impl AppState {
    pub fn new(
        provider: Arc<dyn PlanGenerator>,
        cache: Arc<dyn ResultCache>,
        cache_ttl_secs: u64,
    ) -> Self {
        Self {
            provider,
            cache,
            cache_ttl_secs,
        }
    }
}

/// Build the axum router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/plan/generate-plan",
            post(super::routes::plan::generate_plan),
        )
        .route("/plan/update-plan", post(super::routes::plan::update_plan))
        .route("/health", get(super::routes::health::get_health))
        // Body size limit: 1 MiB. Plans and comments are short text; anything
        // larger is rejected before JSON parsing.
        .layer(DefaultBodyLimit::max(1024 * 1024))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn start_server(bind: &str, state: AppState) -> anyhow::Result<()> {
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(bind).await?;
    tracing::info!("plan service listening on {bind}");
    axum::serve(listener, app).await?;
    Ok(())
}
