//! Logging setup
//!
//! The store is a library, so subscriber installation is left to the
//! embedding view layer; this helper wires up the same env-filter +
//! pretty/json stack used across the deployment. Calling it twice is
//! harmless (the second install is ignored).

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Install the global tracing subscriber
pub fn init(config: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("stylati={}", config.level)));

    if config.format == "json" {
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init();
    } else {
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init();
    }
}
