//! Planning Backends
//!
//! The server and the CLI reach the planner through [`PlanBackend`]. The
//! HTTP implementation talks to either the upstream agent or a running
//! Roameo server, both of which expose the same `{prompt}` contract.

mod http;

pub use http::HttpPlanBackend;

use async_trait::async_trait;
use serde_json::Value;

use crate::plan::{plan_from_value, PlanError, PlanResult};

/// Anything that can turn a prompt into raw plan JSON
#[async_trait]
pub trait PlanBackend: Send + Sync {
    /// Send one prompt; the body is returned as-is on a 2xx response
    async fn request_plan(&self, prompt: &str) -> Result<Value, PlanError>;

    /// Where requests go, for logs and health output
    fn endpoint(&self) -> &str;
}

/// Request, validate and collapse in one step
pub async fn fetch_plan(backend: &dyn PlanBackend, prompt: &str) -> PlanResult {
    tracing::info!(endpoint = backend.endpoint(), "Requesting plan");

    let outcome = match backend.request_plan(prompt).await {
        Ok(body) => plan_from_value(body),
        Err(e) => Err(e),
    };

    PlanResult::from_outcome(outcome)
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Backend that replays a canned answer and records prompts
    pub struct StubBackend {
        answer: Result<Value, PlanError>,
        pub prompts: Mutex<Vec<String>>,
    }

    impl StubBackend {
        pub fn ok(body: Value) -> Self {
            Self {
                answer: Ok(body),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn failing(error: PlanError) -> Self {
            Self {
                answer: Err(error),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl PlanBackend for StubBackend {
        async fn request_plan(&self, prompt: &str) -> Result<Value, PlanError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.answer.clone()
        }

        fn endpoint(&self) -> &str {
            "stub://planner"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::StubBackend;
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_fetch_success() {
        let backend = StubBackend::ok(json!({
            "result": "Enjoy Chicago!",
            "structured": {"hotels": [{"name": "The Drake"}]}
        }));

        let result = fetch_plan(&backend, "Chicago on May 7").await;
        let plan = result.plan().unwrap();
        assert_eq!(plan.summary.as_deref(), Some("Enjoy Chicago!"));
        assert_eq!(plan.hotels.len(), 1);
        assert_eq!(*backend.prompts.lock().unwrap(), vec!["Chicago on May 7"]);
    }

    #[tokio::test]
    async fn test_fetch_transport_failure() {
        let backend = StubBackend::failing(PlanError::Transport("connection refused".into()));
        let result = fetch_plan(&backend, "Chicago").await;
        assert_eq!(result, PlanResult::failed());
    }

    #[tokio::test]
    async fn test_fetch_backend_error_body() {
        let backend = StubBackend::ok(json!({"error": "LLM quota exceeded"}));
        let result = fetch_plan(&backend, "Chicago").await;
        assert_eq!(result.error(), Some("Failed to get plan."));
    }
}
