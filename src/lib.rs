//! # Roameo
//!
//! Travel planner front end: a free-text prompt goes to a planning backend,
//! and the structured answer comes back as a dashboard of cards plus a map.
//!
//! ## Features
//!
//! - **Validated model**: backend JSON is checked once at the boundary
//! - **Pure view models**: cards, sections and map layout, shared by the
//!   web UI and the CLI
//! - **Stale-safe**: request tickets keep late responses from clobbering
//!   newer ones
//! - **Relay server**: axum server for the UI and the `/api/agent` endpoint
//!
//! ## Modules
//!
//! - [`plan`]: response model and parsing
//! - [`render`]: dashboard, section and card view models
//! - [`map`]: geocoded points, map view and tile math
//! - [`session`]: request tracking for the agent panel
//! - `api`, `planner`, `config`, `logging`: native server stack (`server`
//!   feature)
//!
//! ## Quick Start
//!
//! ```rust
//! use roameo::map::MapSettings;
//! use roameo::plan::{parse_response, PlanResult};
//! use roameo::render::Dashboard;
//!
//! let body = r#"{"result": "Enjoy Chicago!", "structured": {"flights": [{"from": "BOS", "to": "ORD"}]}}"#;
//! let result = PlanResult::from_outcome(parse_response(body));
//! let dashboard = Dashboard::from_result(Some(&result), &MapSettings::default());
//!
//! assert_eq!(dashboard.summary.as_deref(), Some("Enjoy Chicago!"));
//! assert_eq!(dashboard.sections[0].cards[0].title, "BOS → ORD");
//! ```

pub mod map;
pub mod plan;
pub mod render;
pub mod session;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod logging;
#[cfg(feature = "server")]
pub mod planner;

// Re-export top-level types for convenience
pub use plan::{
    parse_response, AgentRequest, PlanError, PlanResult, TripMetadata, TripPlan, AGENT_PATH,
    FAILED_TO_GET_PLAN,
};

pub use render::{Card, Dashboard, Section, SectionKind};

pub use map::{GeoPoint, LatLng, MapSettings, MapView, TileLayer};

pub use session::{PlanRequest, PlannerSession, RequestTicket, RequestTracker};

#[cfg(feature = "server")]
pub use api::{build_router, serve, ApiError, AppState};

#[cfg(feature = "server")]
pub use config::{Config, ConfigError, LoggingConfig, PlannerConfig, ServerConfig};

#[cfg(feature = "server")]
pub use planner::{fetch_plan, HttpPlanBackend, PlanBackend};
