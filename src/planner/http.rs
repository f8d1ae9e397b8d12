//! HTTP planner client

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use super::PlanBackend;
use crate::config::PlannerConfig;
use crate::plan::{agent_url, AgentRequest, PlanError};

/// Posts `{prompt}` to a fixed agent URL
pub struct HttpPlanBackend {
    client: Client,
    url: String,
}

impl HttpPlanBackend {
    /// Build a client for the given agent URL
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, PlanError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PlanError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn from_config(config: &PlannerConfig) -> Result<Self, PlanError> {
        Self::new(
            config.url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// Client for a Roameo server's `/api/agent` under `base`
    pub fn for_server(base: &str, timeout: Duration) -> Result<Self, PlanError> {
        Self::new(agent_url(base), timeout)
    }
}

#[async_trait]
impl PlanBackend for HttpPlanBackend {
    async fn request_plan(&self, prompt: &str) -> Result<Value, PlanError> {
        let response = self
            .client
            .post(&self.url)
            .json(&AgentRequest::new(prompt))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PlanError::Transport("Request timed out".to_string())
                } else {
                    PlanError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %self.url, status = status.as_u16(), "Planner returned error status");
            return Err(PlanError::Status(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| PlanError::Decode(e.to_string()))
    }

    fn endpoint(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_server_targets_agent_path() {
        let backend =
            HttpPlanBackend::for_server("http://localhost:8085/", Duration::from_secs(5)).unwrap();
        assert_eq!(backend.endpoint(), "http://localhost:8085/api/agent");
    }

    #[test]
    fn test_from_config() {
        let backend = HttpPlanBackend::from_config(&PlannerConfig::default()).unwrap();
        assert_eq!(backend.endpoint(), "http://localhost:8000/api/agent");
    }

    #[tokio::test]
    async fn test_unreachable_is_transport_error() {
        // Port 9 (discard) is not listening on test hosts
        let backend =
            HttpPlanBackend::new("http://127.0.0.1:9/api/agent", Duration::from_secs(2)).unwrap();
        let err = backend.request_plan("Chicago").await.unwrap_err();
        assert!(matches!(err, PlanError::Transport(_)));
    }
}
