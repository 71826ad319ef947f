//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ClientConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ClientConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<ClientConfig, ConfigError> {
    let config: ClientConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Apply timeout overrides (e.g. from the command line) and re-validate.
pub fn with_timeout_overrides(
    mut config: ClientConfig,
    connection_timeout_secs: Option<f64>,
    data_timeout_secs: Option<f64>,
) -> Result<ClientConfig, ConfigError> {
    if connection_timeout_secs.is_some() {
        config.connection_timeout_secs = connection_timeout_secs;
    }
    if data_timeout_secs.is_some() {
        config.data_timeout_secs = data_timeout_secs;
    }
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}
