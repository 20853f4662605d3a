//! Configuration module
//!
//! Startup configuration comes from the environment (a `.env` file is
//! honored). The service listener port and the classifier artifact path are
//! required: the service refuses to start without them.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

/// Default metrics listener port when METRICS_PORT is not set.
const DEFAULT_METRICS_PORT: u16 = 9100;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    Missing(&'static str),

    #[error("environment variable {var} has invalid value {value:?}: expected {expected}")]
    Invalid {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Inference service port
    pub port: u16,

    /// Metrics scrape port (separate listener)
    pub metrics_port: u16,

    /// Path to the classifier artifact file
    pub model_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port("PORT", require("PORT")?)?;

        let metrics_port = match env::var("METRICS_PORT") {
            Ok(value) => parse_port("METRICS_PORT", value)?,
            Err(_) => DEFAULT_METRICS_PORT,
        };

        let model_path = PathBuf::from(require("MODEL_PATH")?);

        Ok(Self {
            port,
            metrics_port,
            model_path,
        })
    }
}

fn require(var: &'static str) -> Result<String, ConfigError> {
    env::var(var).map_err(|_| ConfigError::Missing(var))
}

fn parse_port(var: &'static str, value: String) -> Result<u16, ConfigError> {
    value.parse().map_err(|_| ConfigError::Invalid {
        var,
        value,
        expected: "a TCP port number",
    })
}
