//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, connection limit > 0)
//! - Validate addresses parse before anything binds
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: OriginConfig → Result<(), Vec<ValidationError>>

use std::net::SocketAddr;

use thiserror::Error;
use tokio::sync::Semaphore;

use crate::config::schema::OriginConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address `{0}` is not a socket address")]
    InvalidBindAddress(String),

    #[error("listener.max_concurrent_requests must be greater than zero")]
    ZeroMaxConcurrentRequests,

    #[error("listener.max_concurrent_requests {0} exceeds the limit of {max}", max = Semaphore::MAX_PERMITS)]
    MaxConcurrentRequestsTooLarge(usize),

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroRequestTimeout,

    #[error("access.local_only_paths entry `{0}` must start with '/'")]
    InvalidLocalOnlyPath(String),

    #[error("observability.log_level `{0}` is not one of trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("observability.metrics_address `{0}` is not a socket address")]
    InvalidMetricsAddress(String),
}

/// Check a parsed configuration, collecting every problem found.
pub fn validate_config(config: &OriginConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }
    if config.listener.max_concurrent_requests == 0 {
        errors.push(ValidationError::ZeroMaxConcurrentRequests);
    } else if config.listener.max_concurrent_requests > Semaphore::MAX_PERMITS {
        errors.push(ValidationError::MaxConcurrentRequestsTooLarge(
            config.listener.max_concurrent_requests,
        ));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }
    for path in &config.access.local_only_paths {
        if !path.starts_with('/') {
            errors.push(ValidationError::InvalidLocalOnlyPath(path.clone()));
        }
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }
    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(validate_config(&OriginConfig::default()), Ok(()));
    }

    #[test]
    fn collects_every_error() {
        let mut config = OriginConfig::default();
        config.listener.bind_address = "localhost".into();
        config.listener.max_concurrent_requests = 0;
        config.timeouts.request_secs = 0;
        config.access.local_only_paths = vec!["admin".into()];
        config.observability.log_level = "verbose".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::InvalidBindAddress("localhost".into()),
                ValidationError::ZeroMaxConcurrentRequests,
                ValidationError::ZeroRequestTimeout,
                ValidationError::InvalidLocalOnlyPath("admin".into()),
                ValidationError::InvalidLogLevel("verbose".into()),
            ]
        );
    }

    #[test]
    fn metrics_address_checked_only_when_enabled() {
        let mut config = OriginConfig::default();
        config.observability.metrics_address = "nope".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::InvalidMetricsAddress("nope".into())])
        );
    }

    #[test]
    fn concurrency_cap_bounded_by_semaphore() {
        let mut config = OriginConfig::default();
        config.listener.max_concurrent_requests = Semaphore::MAX_PERMITS;
        assert!(validate_config(&config).is_ok());

        config.listener.max_concurrent_requests = 9_000_000_000_000_000_000;
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::MaxConcurrentRequestsTooLarge(
                9_000_000_000_000_000_000
            )])
        );
    }

    #[test]
    fn log_level_is_case_insensitive() {
        let mut config = OriginConfig::default();
        config.observability.log_level = "DEBUG".into();
        assert!(validate_config(&config).is_ok());
    }
}
