//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file and passed explicitly into the
//! adapters' constructors at startup; nothing reads global state.

use serde::Deserialize;
use std::path::Path;
use tracing_subscriber::{fmt, EnvFilter};

use crate::domain::EventCode;
use crate::error::{ConfigError, Result};

#[derive(Debug, Deserialize)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub broker: BrokerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Scoring server endpoint and the events to bridge.
#[derive(Debug, Deserialize)]
pub struct ScoringConfig {
    pub host: String,
    #[serde(default = "default_scoring_port")]
    pub port: u16,
    /// Event codes to stream; one feed connection is opened per event.
    pub events: Vec<EventCode>,
}

const fn default_scoring_port() -> u16 {
    18080
}

impl ScoringConfig {
    /// Base URL of the REST API.
    #[must_use]
    pub fn api_base(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Websocket URL of one event's push stream.
    #[must_use]
    pub fn stream_url(&self, event: &EventCode) -> String {
        format!(
            "ws://{}:{}/api/v2/stream/?code={}",
            self.host, self.port, event
        )
    }
}

/// Message bus connection settings.
#[derive(Debug, Deserialize)]
pub struct BrokerConfig {
    /// Broker URL, e.g. `mqtt://localhost:1883`.
    pub url: String,
    #[serde(default = "default_client_id")]
    pub client_id: String,
    /// Optional topic to subscribe to and log, for observing bus traffic.
    #[serde(default)]
    pub monitor_topic: Option<String>,
}

fn default_client_id() -> String {
    "scorebridge".to_string()
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;

        let config: Self = toml::from_str(&content).map_err(ConfigError::Parse)?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.scoring.host.is_empty() {
            return Err(ConfigError::MissingField { field: "host" }.into());
        }
        if self.scoring.events.is_empty() {
            return Err(ConfigError::MissingField { field: "events" }.into());
        }
        if self.scoring.events.iter().any(EventCode::is_empty) {
            return Err(ConfigError::InvalidValue {
                field: "events",
                reason: "event codes cannot be empty".into(),
            }
            .into());
        }
        if self.broker.url.is_empty() {
            return Err(ConfigError::MissingField { field: "url" }.into());
        }
        if self.broker.client_id.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "client_id",
                reason: "client id cannot be empty".into(),
            }
            .into());
        }
        Ok(())
    }

    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.logging.level));

        match self.logging.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}
