//! Request middleware.
//!
//! Order on the request path:
//! ```text
//! origin.rs      (classify, attach RequestOrigin)
//!     → local_only.rs (refuse remote callers on local-only paths)
//!     → handler
//! ```

pub mod local_only;
pub mod origin;

pub use local_only::local_only_middleware;
pub use origin::{origin_middleware, RequestOrigin};
