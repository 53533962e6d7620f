//! Plan generation routes: the request → cache → provider orchestration.
//!
//! Both operations follow the same path: derive the cache key from the full
//! payload, return a cache hit immediately, otherwise call the completion
//! provider and cache only a successful result. Provider failures surface
//! as HTTP 500 with a detail string; nothing is cached on the error arm.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use tracing::{debug, error};

use crate::api::server::AppState;
use crate::cache::cache_key;
use crate::models::{EventRequest, PlanResult, PlanUpdateRequest};

fn plan_response(plan_text: String) -> (StatusCode, Json<Value>) {
    let body = serde_json::to_value(PlanResult { plan_text })
        .unwrap_or_else(|_| json!({ "plan_text": "" }));
    (StatusCode::OK, Json(body))
}

fn error_response(operation: &str, detail: impl std::fmt::Display) -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "detail": format!("Error {operation} plan: {detail}") })),
    )
}

/// POST /plan/generate-plan
pub async fn generate_plan(
    State(state): State<AppState>,
    Json(req): Json<EventRequest>,
) -> (StatusCode, Json<Value>) {
    let key = cache_key(&req);

    if let Some(cached) = state.cache.get(&key).await {
        debug!(key = %&key[..8], "generate-plan served from cache");
        return plan_response(cached);
    }

    match state.provider.generate_plan(&req).await {
        Ok(plan_text) => {
            state
                .cache
                .set(&key, &plan_text, state.cache_ttl_secs)
                .await;
            plan_response(plan_text)
        }
        Err(e) => {
            error!(error = %e, "plan generation failed");
            error_response("generating", e)
        }
    }
}

/// POST /plan/update-plan
pub async fn update_plan(
    State(state): State<AppState>,
    Json(req): Json<PlanUpdateRequest>,
) -> (StatusCode, Json<Value>) {
    let key = cache_key(&req);

    if let Some(cached) = state.cache.get(&key).await {
        debug!(key = %&key[..8], "update-plan served from cache");
        return plan_response(cached);
    }

    match state.provider.update_plan(&req).await {
        Ok(plan_text) => {
            state
                .cache
                .set(&key, &plan_text, state.cache_ttl_secs)
                .await;
            plan_response(plan_text)
        }
        Err(e) => {
            error!(error = %e, "plan update failed");
            error_response("updating", e)
        }
    }
}
