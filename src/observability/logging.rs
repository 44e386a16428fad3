//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Derive the default filter from configured log level
//!
//! # Design Decisions
//! - `RUST_LOG` always wins over the configured level

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

/// Filter directive used when `RUST_LOG` is unset.
pub fn default_directive(config: &ObservabilityConfig) -> String {
    let level = config.log_level.to_ascii_lowercase();
    format!("request_origin={level},tower_http={level}")
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_follows_config_level() {
        let config = ObservabilityConfig {
            log_level: "DEBUG".into(),
            ..ObservabilityConfig::default()
        };
        assert_eq!(default_directive(&config), "request_origin=debug,tower_http=debug");
    }
}
