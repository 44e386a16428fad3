//! Request origin classification library.
//!
//! Decides whether a request came from the serving host and renders the
//! caller's address canonically, plus an Axum service that exposes both.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod origin;

pub use config::OriginConfig;
pub use http::{OriginServer, RequestOrigin};
pub use lifecycle::Shutdown;
pub use origin::{is_local, normalize_ip, normalized_remote_ip, ConnectionAddrs};
