//! Process configuration, read from the environment.
//!
//! | Variable                 | Default   |
//! |--------------------------|-----------|
//! | `FLAVORSTOCK_HOST`       | `0.0.0.0` |
//! | `FLAVORSTOCK_PORT`       | `3000`    |
//! | `FLAVORSTOCK_LOG_FORMAT` | `json`    |
//!
//! The log filter itself is controlled by `RUST_LOG`.

use thiserror::Error;

use flavorstock_observability::LogFormat;

pub const HOST_VAR: &str = "FLAVORSTOCK_HOST";
pub const PORT_VAR: &str = "FLAVORSTOCK_PORT";
pub const LOG_FORMAT_VAR: &str = "FLAVORSTOCK_LOG_FORMAT";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a port number, got `{value}`")]
    InvalidPort { var: &'static str, value: String },

    #[error("{var}: {source}")]
    InvalidLogFormat {
        var: &'static str,
        #[source]
        source: flavorstock_observability::ParseLogFormatError,
    },

    #[error("{var} cannot be empty")]
    Empty { var: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub log_format: LogFormat,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_format: LogFormat::default(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup; unset keys use defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(host) = lookup(HOST_VAR) {
            let host = host.trim();
            if host.is_empty() {
                return Err(ConfigError::Empty { var: HOST_VAR });
            }
            config.host = host.to_string();
        }

        if let Some(port) = lookup(PORT_VAR) {
            config.port = port.trim().parse().map_err(|_| ConfigError::InvalidPort {
                var: PORT_VAR,
                value: port.clone(),
            })?;
        }

        if let Some(format) = lookup(LOG_FORMAT_VAR) {
            config.log_format = format
                .parse()
                .map_err(|source| ConfigError::InvalidLogFormat {
                    var: LOG_FORMAT_VAR,
                    source,
                })?;
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ApiConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn reads_all_variables() {
        let config = ApiConfig::from_lookup(lookup(&[
            (HOST_VAR, "127.0.0.1"),
            (PORT_VAR, "8080"),
            (LOG_FORMAT_VAR, "pretty"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn rejects_bad_port() {
        let err = ApiConfig::from_lookup(lookup(&[(PORT_VAR, "http")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidPort {
                var: PORT_VAR,
                value: "http".to_string()
            }
        );

        assert!(ApiConfig::from_lookup(lookup(&[(PORT_VAR, "70000")])).is_err());
    }

    #[test]
    fn rejects_bad_log_format_and_empty_host() {
        let err = ApiConfig::from_lookup(lookup(&[(LOG_FORMAT_VAR, "xml")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogFormat { .. }));

        let err = ApiConfig::from_lookup(lookup(&[(HOST_VAR, " ")])).unwrap_err();
        assert_eq!(err, ConfigError::Empty { var: HOST_VAR });
    }
}
