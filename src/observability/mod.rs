//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! HTTP layer and origin middleware produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (locality counters)
//!
//! Consumers:
//!     → stdout (tracing-subscriber fmt layer)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every request span
//! - Metrics are cheap (atomic increments); no-ops when no recorder is installed

pub mod logging;
pub mod metrics;
