//! Logging setup
//!
//! `RUST_LOG` wins when set; otherwise the configured level applies to this
//! crate and HTTP tracing stays at debug.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Directive used when neither `RUST_LOG` nor config says otherwise
pub const DEFAULT_FILTER: &str = "roameo=info,tower_http=debug";

/// Filter directives for a configured level
pub fn filter_directives(config: &LoggingConfig) -> String {
    let level = config.level.trim();
    if level.is_empty() {
        return DEFAULT_FILTER.to_string();
    }
    format!("roameo={},tower_http=debug", level)
}

/// Install the global subscriber
pub fn init(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(config)));

    let registry = tracing_subscriber::registry().with(filter);

    if config.format.eq_ignore_ascii_case("json") {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
