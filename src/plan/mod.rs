//! Trip Plan Model
//!
//! The planning backend's response, validated at the boundary.
//!
//! ## Modules
//!
//! - `types`: `TripPlan`, the item records and the tagged `PlanResult`
//! - `parse`: merge of `result` + `structured` and per-section validation
//! - `lenient`: field decoders that turn wrong JSON types into `None`
//! - `error`: `PlanError` and the user-facing failure message

mod error;
mod lenient;
mod parse;
mod types;

pub use error::{PlanError, PlanOutcome, FAILED_TO_GET_PLAN};
pub use parse::{parse_response, plan_from_value, summary_text, NO_SUMMARY};
pub use types::{
    AttractionItem, EventItem, FlightItem, HotelItem, PlanResult, Price, TripMetadata, TripPlan,
};

/// Request body for `POST /api/agent`
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AgentRequest {
    pub prompt: String,
}

impl AgentRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

/// Path of the planning endpoint, relative to the API base
pub const AGENT_PATH: &str = "/api/agent";

/// Full URL of the agent endpoint under an API base
///
/// An empty base gives the same-origin path.
pub fn agent_url(base: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), AGENT_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_url() {
        assert_eq!(agent_url("http://localhost:8085"), "http://localhost:8085/api/agent");
        assert_eq!(agent_url("http://localhost:8085/"), "http://localhost:8085/api/agent");
        assert_eq!(agent_url(""), "/api/agent");
    }

    #[test]
    fn test_agent_request_body() {
        let body = serde_json::to_value(AgentRequest::new("Chicago on May 7")).unwrap();
        assert_eq!(body, serde_json::json!({"prompt": "Chicago on May 7"}));
    }
}
