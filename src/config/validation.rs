//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts finite and non-negative)
//! - Reject values the HTTP client would refuse at build time
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ClientConfig → Result<(), Vec<ValidationError>>

use reqwest::header::{HeaderName, HeaderValue};
use thiserror::Error;

use crate::config::schema::ClientConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must be a finite, non-negative number of seconds")]
    InvalidTimeout { field: &'static str },

    #[error("user_agent must not be empty")]
    EmptyUserAgent,

    #[error("invalid header '{0}'")]
    InvalidHeader(String),

    #[error("unknown log level '{0}'")]
    InvalidLogLevel(String),
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_timeout(
        "connection_timeout_secs",
        config.connection_timeout_secs,
        &mut errors,
    );
    check_timeout("data_timeout_secs", config.data_timeout_secs, &mut errors);

    if config.user_agent.trim().is_empty() {
        errors.push(ValidationError::EmptyUserAgent);
    }

    for (name, value) in &config.headers {
        if HeaderName::from_bytes(name.as_bytes()).is_err()
            || HeaderValue::from_str(value).is_err()
        {
            errors.push(ValidationError::InvalidHeader(name.clone()));
        }
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_timeout(field: &'static str, value: Option<f64>, errors: &mut Vec<ValidationError>) {
    if let Some(secs) = value {
        if !secs.is_finite() || secs < 0.0 {
            errors.push(ValidationError::InvalidTimeout { field });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ClientConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ClientConfig {
            connection_timeout_secs: Some(-1.0),
            data_timeout_secs: Some(f64::NAN),
            user_agent: "  ".to_string(),
            ..Default::default()
        };
        config
            .headers
            .insert("bad header".to_string(), "x".to_string());
        config.observability.log_level = "loud".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(errors.contains(&ValidationError::InvalidTimeout {
            field: "connection_timeout_secs"
        }));
        assert!(errors.contains(&ValidationError::EmptyUserAgent));
        assert!(errors.contains(&ValidationError::InvalidLogLevel("loud".to_string())));
    }

    #[test]
    fn test_zero_timeout_is_valid() {
        let config = ClientConfig {
            data_timeout_secs: Some(0.0),
            ..Default::default()
        };
        assert!(validate_config(&config).is_ok());
    }
}
