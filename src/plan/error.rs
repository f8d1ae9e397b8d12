//! Plan request error types
//!
//! Everything that can go wrong between submitting a prompt and holding a
//! validated [`TripPlan`](super::TripPlan). All variants collapse to the same
//! user-facing message; the distinction only matters for logs.

use thiserror::Error;

/// Message shown to the user for any failed plan request
pub const FAILED_TO_GET_PLAN: &str = "Failed to get plan.";

/// Errors that can occur while fetching or decoding a plan
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    /// Connection, DNS or timeout failure before a response arrived
    #[error("Transport error: {0}")]
    Transport(String),

    /// Backend answered with a non-success status
    #[error("Backend returned status {0}")]
    Status(u16),

    /// Body was not JSON or not shaped like a plan response
    #[error("Decode error: {0}")]
    Decode(String),

    /// Backend reported its own failure in the body
    #[error("Backend error: {0}")]
    Backend(String),
}

impl From<serde_json::Error> for PlanError {
    fn from(err: serde_json::Error) -> Self {
        PlanError::Decode(err.to_string())
    }
}

/// Result type alias for plan operations
pub type PlanOutcome<T> = Result<T, PlanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PlanError::Status(502);
        assert_eq!(err.to_string(), "Backend returned status 502");

        let err = PlanError::Backend("tool crashed".to_string());
        assert_eq!(err.to_string(), "Backend error: tool crashed");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: PlanError = json_err.into();
        assert!(matches!(err, PlanError::Decode(_)));
    }
}
