//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;

use request_origin::{OriginConfig, OriginServer, Shutdown};
use tokio::net::TcpListener;

/// A server running on an ephemeral TCP port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub server: Arc<OriginServer>,
    pub shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start a server on `bind` (port 0 picks a free port). Returns `None` when
/// the address family is unavailable on this host.
pub async fn start_server(bind: &str, config: OriginConfig) -> Option<TestServer> {
    let listener = TcpListener::bind(bind).await.ok()?;
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = Arc::new(OriginServer::new(config));
    let task_server = server.clone();
    let task_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = task_server.run_tcp(listener, task_shutdown).await;
    });

    Some(TestServer { addr, server, shutdown })
}

/// HTTP client that never pools or proxies.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
