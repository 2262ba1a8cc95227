//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All fixture services produce:
//!     → logging.rs (structured log events via tracing)
//!     → per-request spans via tower-http's TraceLayer
//!
//! Consumers:
//!     → stdout (scanner runs capture it alongside findings)
//! ```
//!
//! # Design Decisions
//! - Structured logging through the tracing crate
//! - Log level from config, overridable with RUST_LOG
//! - No metrics endpoint: the corpus is scanned, not operated

pub mod logging;
