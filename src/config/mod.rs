//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → OriginConfig (validated, immutable)
//!     → handed to the HTTP server and observability setup
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so an empty file is a valid config
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{AccessConfig, ListenerConfig, ObservabilityConfig, OriginConfig, TimeoutConfig};
pub use validation::{validate_config, ValidationError};
