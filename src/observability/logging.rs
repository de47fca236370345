//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Configure log level from config, overridable by `RUST_LOG`
//!
//! # Design Decisions
//! - Logs go to stderr: stdout carries native messaging frames
//! - JSON format on request, human-readable format otherwise

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

/// Build the filter: `RUST_LOG` wins, then the configured level.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("shortcut_redirect={level}").into())
}

/// Install the global subscriber. Call once, before the registry is loaded.
pub fn init_logging(config: &ObservabilityConfig) {
    let json = config.json_logs;
    tracing_subscriber::registry()
        .with(env_filter(&config.log_level))
        .with(json.then(|| fmt::layer().json().with_writer(std::io::stderr)))
        .with((!json).then(|| fmt::layer().with_writer(std::io::stderr)))
        .init();
}
