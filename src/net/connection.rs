//! Connection address capture.
//!
//! # Responsibilities
//! - Build a `ConnectionAddrs` for each accepted connection
//! - TCP: remote from the peer address, local from the accepted socket
//! - Unix socket: both sides absent

use std::net::SocketAddr;

use axum::extract::connect_info::Connected;
use axum::serve::IncomingStream;
use tokio::net::TcpListener;

use crate::origin::ConnectionAddrs;

impl ConnectionAddrs {
    /// Pair for an IP connection given both socket endpoints.
    pub fn from_socket_addrs(local: SocketAddr, remote: SocketAddr) -> Self {
        Self::new(Some(local.ip()), Some(remote.ip()))
    }
}

impl Connected<IncomingStream<'_, TcpListener>> for ConnectionAddrs {
    fn connect_info(stream: IncomingStream<'_, TcpListener>) -> Self {
        let remote = *stream.remote_addr();
        match stream.io().local_addr() {
            Ok(local) => Self::from_socket_addrs(local, remote),
            Err(e) => {
                tracing::debug!(peer_addr = %remote, error = %e, "Local address unavailable");
                Self::new(None, Some(remote.ip()))
            }
        }
    }
}

#[cfg(unix)]
impl Connected<IncomingStream<'_, tokio::net::UnixListener>> for ConnectionAddrs {
    fn connect_info(_stream: IncomingStream<'_, tokio::net::UnixListener>) -> Self {
        Self::unaddressed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::origin::{is_local, normalized_remote_ip};

    #[test]
    fn socket_addrs_drop_ports() {
        let local: SocketAddr = "10.0.0.5:8080".parse().unwrap();
        let remote: SocketAddr = "10.0.0.5:51234".parse().unwrap();
        let addrs = ConnectionAddrs::from_socket_addrs(local, remote);
        assert_eq!(addrs.local, Some(local.ip()));
        assert_eq!(addrs.remote, Some(remote.ip()));
        assert!(is_local(&addrs));
    }

    #[test]
    fn dual_stack_peer_normalizes_to_ipv4() {
        let local: SocketAddr = "[::ffff:10.0.0.5]:8080".parse().unwrap();
        let remote: SocketAddr = "[::ffff:192.168.1.1]:40000".parse().unwrap();
        let addrs = ConnectionAddrs::from_socket_addrs(local, remote);
        assert!(!is_local(&addrs));
        assert_eq!(normalized_remote_ip(&addrs), "192.168.1.1");
    }
}
