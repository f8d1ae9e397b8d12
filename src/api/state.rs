//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::planner::PlanBackend;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Where prompts are relayed
    pub backend: Arc<dyn PlanBackend>,
    /// Loaded configuration
    pub config: Arc<Config>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(backend: Arc<dyn PlanBackend>, config: Config) -> Self {
        Self {
            backend,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
