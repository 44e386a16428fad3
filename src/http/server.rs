//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, timeout, concurrency limit,
//!   origin classification, local-only guard)
//! - Serve over TCP and Unix sockets with connect info
//! - Stop on shutdown signal

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::OriginConfig;
use crate::http::middleware::{local_only_middleware, origin_middleware, RequestOrigin};
use crate::http::request::{make_request_span, propagate_request_id_layer, set_request_id_layer};
use crate::origin::ConnectionAddrs;

/// HTTP server reporting request origin.
pub struct OriginServer {
    router: Router,
    config: OriginConfig,
}

impl OriginServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: OriginConfig) -> Self {
        let router = build_router(&config);
        Self { router, config }
    }

    /// The fully layered router. Requests sent to it directly (without a
    /// listener) carry no connect info and classify as unaddressed.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &OriginConfig {
        &self.config
    }

    /// Serve on a TCP listener until shutdown is signalled.
    pub async fn run_tcp(
        &self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let app = self
            .router()
            .into_make_service_with_connect_info::<ConnectionAddrs>();

        axum::serve(listener, app)
            .with_graceful_shutdown(wait_for_shutdown(shutdown))
            .await?;

        tracing::info!(address = %addr, "HTTP server stopped");
        Ok(())
    }

    /// Serve on a Unix domain socket until shutdown is signalled.
    #[cfg(unix)]
    pub async fn run_unix(
        &self,
        listener: tokio::net::UnixListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        tracing::info!(address = ?listener.local_addr()?, "Unix socket server starting");

        let app = self
            .router()
            .into_make_service_with_connect_info::<ConnectionAddrs>();

        axum::serve(listener, app)
            .with_graceful_shutdown(wait_for_shutdown(shutdown))
            .await?;

        tracing::info!("Unix socket server stopped");
        Ok(())
    }
}

/// Build the Axum router with all middleware layers.
#[allow(deprecated)]
fn build_router(config: &OriginConfig) -> Router {
    let access = Arc::new(config.access.clone());

    Router::new()
        .route("/origin", get(origin_handler))
        .route("/health", get(health_handler))
        .route("/admin/status", get(admin_status_handler))
        .layer(middleware::from_fn_with_state(access, local_only_middleware))
        .layer(middleware::from_fn(origin_middleware))
        .layer(
            ServiceBuilder::new()
                .layer(set_request_id_layer())
                .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
                .layer(propagate_request_id_layer())
                .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
                .layer(GlobalConcurrencyLimitLayer::new(config.listener.max_concurrent_requests)),
        )
}

async fn origin_handler(origin: RequestOrigin) -> Json<RequestOrigin> {
    Json(origin)
}

async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

async fn admin_status_handler(origin: RequestOrigin) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "caller": origin.remote_ip,
    }))
}

async fn wait_for_shutdown(mut shutdown: broadcast::Receiver<()>) {
    let _ = shutdown.recv().await;
    tracing::info!("Shutdown signal received");
}
