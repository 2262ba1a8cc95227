//! Reticulum Fixture Corpus
//!
//! Intentionally vulnerable HTTP services used as test inputs for the
//! Reticulum static-analysis scanner. Every defect in this crate is
//! deliberate, annotated at the site where it occurs, and catalogued in
//! [`findings::expected_findings`] so scanner test suites can validate
//! their output against the corpus.
//!
//! # Fixture Services
//!
//! ```text
//!     api-gateway (bin)                payment-api (bin)
//!     ┌──────────────────┐             ┌──────────────────────────┐
//!     │ GET /debug/config│             │ GET /users?id=<value>    │
//!     │   info disclosure│             │   SQL injection          │
//!     │ GET /api/data    │             │ POST /tasks              │
//!     │   static stub    │             │   command injection via  │
//!     └──────────────────┘             │   worker task loop       │
//!                                      │ hardcoded credentials    │
//!     fixtures-cli (bin)               └──────────────────────────┘
//!     findings / probe
//! ```
//!
//! Do not deploy any binary in this crate anywhere reachable from a
//! network you care about.

// Fixture services
pub mod gateway;
pub mod payments;
pub mod worker;

// Expected-findings manifest
pub mod findings;

// Cross-cutting concerns
pub mod config;
pub mod lifecycle;
pub mod observability;

pub use config::FixtureConfig;
pub use lifecycle::Shutdown;
