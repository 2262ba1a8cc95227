//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check bind addresses parse as socket addresses
//! - Validate value ranges (timeouts > 0, database URL non-empty)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: FixtureConfig → Result<(), Vec<ValidationError>>
//! - Runs before a config is accepted by any binary

use std::net::SocketAddr;

use crate::config::schema::FixtureConfig;

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field}: `{value}` is not a valid socket address")]
    InvalidBindAddress { field: &'static str, value: String },

    #[error("payments.database_url must not be empty")]
    EmptyDatabaseUrl,

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroRequestTimeout,
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &FixtureConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_bind_address("gateway.bind_address", &config.gateway.bind_address, &mut errors);
    check_bind_address("payments.bind_address", &config.payments.bind_address, &mut errors);

    if config.payments.database_url.is_empty() {
        errors.push(ValidationError::EmptyDatabaseUrl);
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_bind_address(field: &'static str, value: &str, errors: &mut Vec<ValidationError>) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress {
            field,
            value: value.to_string(),
        });
    }
}
