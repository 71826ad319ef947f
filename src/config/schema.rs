//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML files.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration for an `HttpComponent`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Connection establishment timeout in seconds.
    /// `None` (or 0) sets no explicit timeout.
    pub connection_timeout_secs: Option<f64>,

    /// Timeout for the whole request, response body included, in seconds.
    /// `None` (or 0) sets no explicit timeout.
    pub data_timeout_secs: Option<f64>,

    /// User-Agent header sent with every request.
    pub user_agent: String,

    /// Redirects to follow before a 3xx is reported as a status error.
    pub max_redirects: usize,

    /// Extra headers sent with every request.
    pub headers: BTreeMap<String, String>,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            connection_timeout_secs: None,
            data_timeout_secs: None,
            user_agent: default_user_agent(),
            max_redirects: 0,
            headers: BTreeMap::new(),
            observability: ObservabilityConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Connect timeout as a `Duration`, if one is set.
    pub fn connection_timeout(&self) -> Option<Duration> {
        positive_duration(self.connection_timeout_secs)
    }

    /// Request timeout as a `Duration`, if one is set.
    pub fn data_timeout(&self) -> Option<Duration> {
        positive_duration(self.data_timeout_secs)
    }
}

fn positive_duration(secs: Option<f64>) -> Option<Duration> {
    secs.filter(|s| s.is_finite() && *s > 0.0)
        .map(Duration::from_secs_f64)
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert!(config.connection_timeout_secs.is_none());
        assert!(config.data_timeout_secs.is_none());
        assert_eq!(config.max_redirects, 0);
        assert!(config.user_agent.starts_with("http-component/"));
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_zero_timeout_means_unset() {
        let config = ClientConfig {
            connection_timeout_secs: Some(0.0),
            data_timeout_secs: Some(1.5),
            ..Default::default()
        };
        assert_eq!(config.connection_timeout(), None);
        assert_eq!(config.data_timeout(), Some(Duration::from_millis(1500)));
    }
}
