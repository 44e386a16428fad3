//! Request origin classification.
//!
//! # Data Flow
//! ```text
//! Transport accepts connection
//!     → ConnectionAddrs { local, remote } (net/connection.rs fills it)
//!     → locality.rs   (is_local: same-host check)
//!     → normalize.rs  (normalized_remote_ip: canonical caller address)
//!     → consumers (access guard, logging, /origin handler)
//! ```
//!
//! # Design Decisions
//! - Both operations are pure functions over a `Copy` value
//! - Absent addresses are valid input, never an error
//! - Locality uses raw equality; mapped IPv6 forms are not unified

pub mod addrs;
pub mod locality;
pub mod normalize;

pub use addrs::ConnectionAddrs;
pub use locality::is_local;
pub use normalize::{normalize_ip, normalized_remote_ip};
