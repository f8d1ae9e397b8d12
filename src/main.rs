//! Roameo Server
//!
//! Run with: cargo run --bin roameo
//!
//! # Configuration
//!
//! `ROAMEO_CONFIG` points at a TOML file; otherwise the default locations are
//! searched. Environment variables override file values:
//! - `ROAMEO_HOST`: Host to bind to (default: 0.0.0.0)
//! - `ROAMEO_PORT`: Port to listen on (default: 8085)
//! - `ROAMEO_STATIC_DIR`: Built web UI (default: roameo-ui/dist)
//! - `ROAMEO_PLANNER_URL`: Upstream agent endpoint (default: http://localhost:8000/api/agent)
//! - `ROAMEO_PLANNER_TIMEOUT_SECS`: Upstream timeout (default: 180)
//! - `RUST_LOG`: Log filter (takes precedence over `ROAMEO_LOG_LEVEL`)

use anyhow::Context;
use roameo::api::{serve, AppState};
use roameo::config::Config;
use roameo::planner::HttpPlanBackend;
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match std::env::var("ROAMEO_CONFIG") {
        Ok(path) => Config::load_with_env(&PathBuf::from(&path))
            .with_context(|| format!("Loading config from {}", path))?,
        Err(_) => Config::load_default(),
    };

    roameo::logging::init(&config.logging);

    tracing::info!("Starting Roameo server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Planner endpoint: {}", config.planner.url);
    tracing::info!("Serving UI from {}", config.server.static_dir);

    if !PathBuf::from(&config.server.static_dir).join("index.html").exists() {
        tracing::warn!(
            "No index.html in {} (build the UI with `trunk build` in roameo-ui)",
            config.server.static_dir
        );
    }

    let backend = Arc::new(
        HttpPlanBackend::from_config(&config.planner).context("Creating planner client")?,
    );

    let server_config = config.server.clone();
    let state = AppState::new(backend, config);
    serve(state, &server_config).await?;

    tracing::info!("Roameo server stopped");
    Ok(())
}
