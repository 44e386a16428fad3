//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration for the origin service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct OriginConfig {
    /// Listener configuration (TCP bind address, optional Unix socket).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Locality-based access rules.
    pub access: AccessConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:8080").
    pub bind_address: String,

    /// Optional Unix domain socket path. Requests over it carry no IP address.
    pub unix_socket: Option<PathBuf>,

    /// Maximum concurrent in-flight requests.
    pub max_concurrent_requests: usize,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
            unix_socket: None,
            max_concurrent_requests: 1024,
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Locality-based access configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AccessConfig {
    /// Path prefixes reachable only by same-host callers.
    pub local_only_paths: Vec<String>,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            local_only_paths: vec!["/admin".to_string()],
        }
    }
}

impl AccessConfig {
    /// Whether `path` falls under one of the local-only prefixes.
    pub fn is_local_only(&self, path: &str) -> bool {
        self.local_only_paths.iter().any(|prefix| path.starts_with(prefix.as_str()))
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config: OriginConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:8080");
        assert!(config.listener.unix_socket.is_none());
        assert_eq!(config.timeouts.request_secs, 30);
        assert_eq!(config.access.local_only_paths, vec!["/admin".to_string()]);
        assert!(!config.observability.metrics_enabled);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config: OriginConfig = toml::from_str(
            r#"
            [listener]
            unix_socket = "/run/origin.sock"

            [access]
            local_only_paths = ["/admin", "/debug"]
            "#,
        )
        .unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:8080");
        assert_eq!(config.listener.unix_socket, Some(PathBuf::from("/run/origin.sock")));
        assert_eq!(config.access.local_only_paths.len(), 2);
    }

    #[test]
    fn local_only_matches_prefixes() {
        let access = AccessConfig::default();
        assert!(access.is_local_only("/admin"));
        assert!(access.is_local_only("/admin/status"));
        assert!(!access.is_local_only("/origin"));

        let open = AccessConfig { local_only_paths: Vec::new() };
        assert!(!open.is_local_only("/admin/status"));
    }
}
