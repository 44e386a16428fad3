//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming connection
//!     → listener.rs (bind TCP and optional Unix socket)
//!     → connection.rs (capture local/remote addresses per connection)
//!     → Hand off to HTTP layer as ConnectInfo<ConnectionAddrs>
//! ```
//!
//! # Design Decisions
//! - Addresses are captured once at accept time and copied into every request
//! - Unix socket connections carry no IP addresses at all

pub mod connection;
pub mod listener;

pub use listener::{bind_tcp, ListenerError};
#[cfg(unix)]
pub use listener::bind_unix;
