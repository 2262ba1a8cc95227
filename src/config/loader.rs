//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::FixtureConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<FixtureConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: FixtureConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_toml_uses_defaults() {
        let config: FixtureConfig = toml::from_str("").unwrap();
        assert_eq!(config.gateway.bind_address, "0.0.0.0:8080");
        assert_eq!(config.payments.database_url, "sqlite::memory:");
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config: FixtureConfig = toml::from_str(
            r#"
            [payments]
            bind_address = "127.0.0.1:9999"
            "#,
        )
        .unwrap();
        assert_eq!(config.payments.bind_address, "127.0.0.1:9999");
        assert_eq!(config.gateway.bind_address, "0.0.0.0:8080");
    }
}
