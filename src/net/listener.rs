//! Listener binding.
//!
//! # Responsibilities
//! - Bind the configured TCP address
//! - Bind the optional Unix domain socket, replacing a stale socket file

use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::ListenerConfig;

/// Error type for listener operations.
#[derive(Debug, Error)]
pub enum ListenerError {
    /// Configured address does not parse.
    #[error("Invalid bind address `{address}`: {source}")]
    Address {
        address: String,
        #[source]
        source: std::net::AddrParseError,
    },
    /// Failed to bind to address.
    #[error("Failed to bind: {0}")]
    Bind(#[from] std::io::Error),
}

/// Bind the configured TCP address.
pub async fn bind_tcp(config: &ListenerConfig) -> Result<TcpListener, ListenerError> {
    let addr: SocketAddr = config
        .bind_address
        .parse()
        .map_err(|source| ListenerError::Address {
            address: config.bind_address.clone(),
            source,
        })?;

    let listener = TcpListener::bind(addr).await?;

    tracing::info!(
        address = %listener.local_addr()?,
        max_concurrent_requests = config.max_concurrent_requests,
        "TCP listener bound"
    );

    Ok(listener)
}

/// Bind a Unix domain socket at `path`.
///
/// An existing socket file at `path` is removed first; any other file type is
/// left alone and the bind fails.
#[cfg(unix)]
pub fn bind_unix(path: &std::path::Path) -> Result<tokio::net::UnixListener, ListenerError> {
    use std::os::unix::fs::FileTypeExt;

    if let Ok(meta) = std::fs::symlink_metadata(path) {
        if meta.file_type().is_socket() {
            std::fs::remove_file(path)?;
        }
    }

    let listener = tokio::net::UnixListener::bind(path)?;
    tracing::info!(path = %path.display(), "Unix listener bound");
    Ok(listener)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bind_tcp_rejects_bad_address() {
        let config = ListenerConfig {
            bind_address: "not-an-address".into(),
            ..ListenerConfig::default()
        };
        let err = bind_tcp(&config).await.unwrap_err();
        assert!(matches!(err, ListenerError::Address { .. }));
    }

    #[tokio::test]
    async fn bind_tcp_ephemeral_port() {
        let config = ListenerConfig {
            bind_address: "127.0.0.1:0".into(),
            ..ListenerConfig::default()
        };
        let listener = bind_tcp(&config).await.unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn bind_unix_replaces_stale_socket() {
        let path = std::env::temp_dir().join(format!("origin-listener-{}.sock", std::process::id()));
        let first = bind_unix(&path).unwrap();
        drop(first);
        assert!(path.exists());
        let _second = bind_unix(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
    }
}
