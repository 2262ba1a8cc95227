//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → FixtureConfig (validated, immutable)
//!     → handed to each fixture binary at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; no hot reload for fixtures
//! - All fields have defaults so binaries run with no config file at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::FixtureConfig;
pub use schema::GatewayConfig;
pub use schema::PaymentConfig;
