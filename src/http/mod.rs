//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP or Unix connection (ConnectInfo<ConnectionAddrs>)
//!     → server.rs (Axum setup, layers)
//!     → request.rs (request ID, trace span)
//!     → middleware/origin.rs (attach RequestOrigin)
//!     → middleware/local_only.rs (guard local-only paths)
//!     → handlers (/origin, /health, /admin/status)
//! ```

pub mod middleware;
pub mod request;
pub mod server;

pub use middleware::RequestOrigin;
pub use request::X_REQUEST_ID;
pub use server::OriginServer;
