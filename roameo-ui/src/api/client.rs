//! HTTP API Client
//!
//! The one call the planner makes: `POST /api/agent`.

use gloo_net::http::Request;
use roameo::plan::{agent_url, parse_response, AgentRequest, PlanError, TripPlan};

/// Default API base URL (same origin as the page)
pub const DEFAULT_API_BASE: &str = "";

/// Local storage key for an API base override
pub const API_BASE_KEY: &str = "roameo_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Send one prompt and validate the answer
pub async fn fetch_plan(request: &AgentRequest) -> Result<TripPlan, PlanError> {
    let url = agent_url(&get_api_base());

    let response = Request::post(&url)
        .json(request)
        .map_err(|e| PlanError::Transport(format!("Request build error: {}", e)))?
        .send()
        .await
        .map_err(|e| PlanError::Transport(format!("Network error: {}", e)))?;

    if !response.ok() {
        return Err(PlanError::Status(response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| PlanError::Decode(e.to_string()))?;

    parse_response(&body)
}

