//! Request origin service.
//!
//! # Architecture Overview
//!
//! ```text
//!     TCP client ──▶ ┌──────────┐                 ┌───────────────┐
//!                    │   net    │  ConnectInfo    │     http      │
//!   Unix client ──▶  │ listener │ ──────────────▶ │ origin guard  │ ──▶ handlers
//!                    └──────────┘ ConnectionAddrs └───────┬───────┘
//!                                                         │
//!                                                  ┌──────▼──────┐
//!                                                  │   origin    │
//!                                                  │ is_local /  │
//!                                                  │ normalize   │
//!                                                  └─────────────┘
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use request_origin::config::{load_config, OriginConfig};
use request_origin::lifecycle::{wait_for_signal, Shutdown};
use request_origin::observability::{logging, metrics};
use request_origin::{net, OriginServer};

#[derive(Parser)]
#[command(name = "request-origin")]
#[command(about = "Reports whether requests come from the serving host", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => OriginConfig::default(),
    };

    logging::init(&config.observability);
    tracing::info!("request-origin v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        unix_socket = ?config.listener.unix_socket,
        local_only_paths = ?config.access.local_only_paths,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let shutdown = Shutdown::new();
    let server = Arc::new(OriginServer::new(config));
    let mut tasks = tokio::task::JoinSet::new();

    let listener = net::bind_tcp(&server.config().listener).await?;
    let tcp_server = server.clone();
    let tcp_shutdown = shutdown.subscribe();
    tasks.spawn(async move { tcp_server.run_tcp(listener, tcp_shutdown).await });

    #[cfg(unix)]
    {
        if let Some(path) = server.config().listener.unix_socket.clone() {
            let listener = net::bind_unix(&path)?;
            let unix_server = server.clone();
            let unix_shutdown = shutdown.subscribe();
            tasks.spawn(async move { unix_server.run_unix(listener, unix_shutdown).await });
        }
    }

    tokio::select! {
        res = wait_for_signal() => res?,
        Some(res) = tasks.join_next() => {
            tracing::error!("Server task exited early");
            res??;
        }
    }

    shutdown.trigger();
    while let Some(res) = tasks.join_next().await {
        res??;
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
