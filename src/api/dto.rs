//! Response bodies owned by the server itself
//!
//! `/api/agent` has no DTO here: its request is [`crate::plan::AgentRequest`]
//! and its response is the planner's JSON, passed through.

use serde::{Deserialize, Serialize};

/// Full health status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status
    pub status: String,
    /// Upstream agent endpoint in use
    pub planner_url: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
