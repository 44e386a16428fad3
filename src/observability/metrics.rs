//! Metrics collection and exposition.
//!
//! # Metrics
//! - `origin_requests_total` (counter): requests by `locality` (local/remote)
//! - `origin_local_only_rejected_total` (counter): remote callers refused on
//!   local-only paths

use std::net::SocketAddr;

use metrics::counter;
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape endpoint.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint started");
    Ok(())
}

/// Count a classified request.
pub fn record_origin(is_local: bool) {
    let locality = if is_local { "local" } else { "remote" };
    counter!("origin_requests_total", "locality" => locality).increment(1);
}

/// Count a request refused by the local-only guard.
pub fn record_local_only_rejected() {
    counter!("origin_local_only_rejected_total").increment(1);
}
