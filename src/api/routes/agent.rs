//! Agent Route
//!
//! - POST /api/agent - Relay a prompt to the planning backend
//!
//! The upstream body is returned untouched; validation happens in the
//! client that renders it.

use axum::{extract::State, Json};
use serde_json::Value;
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::plan::AgentRequest;

/// POST /api/agent
pub async fn relay_plan(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AgentRequest>,
) -> ApiResult<Json<Value>> {
    if request.prompt.trim().is_empty() {
        return Err(ApiError::Validation("prompt must not be empty".to_string()));
    }

    tracing::info!(
        planner = state.backend.endpoint(),
        prompt_len = request.prompt.len(),
        "Relaying plan request"
    );

    let body = state.backend.request_plan(&request.prompt).await?;
    Ok(Json(body))
}
