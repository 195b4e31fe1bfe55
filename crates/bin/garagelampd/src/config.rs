//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `garagelamp.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use garagelamp_adapter_gpio_rppal::{GpioError, PinConfig};
use garagelamp_adapter_mqtt::MqttConfig;
use garagelamp_app::ControllerConfig;
use garagelamp_app::config::ControllerConfigError;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Control loop timings and topics.
    pub controller: ControllerConfig,
    /// Broker connection.
    pub mqtt: MqttConfig,
    /// Pin backend and assignment.
    pub gpio: GpioConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Which pins drive the controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GpioBackend {
    /// Raspberry Pi header through rppal.
    #[default]
    Rppal,
    /// In-memory pins, for dry runs off the board.
    Virtual,
}

impl GpioBackend {
    fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "rppal" => Some(Self::Rppal),
            "virtual" => Some(Self::Virtual),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GpioConfig {
    pub backend: GpioBackend,
    #[serde(flatten)]
    pub pins: PinConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "garagelamp=info,rumqttc=warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `garagelamp.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("garagelamp.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("GARAGELAMP_MQTT_HOST") {
            self.mqtt.broker_host = val;
        }
        if let Ok(val) = std::env::var("GARAGELAMP_MQTT_PORT") {
            if let Ok(port) = val.parse() {
                self.mqtt.broker_port = port;
            }
        }
        if let Ok(val) = std::env::var("GARAGELAMP_MQTT_USERNAME") {
            self.mqtt.username = Some(val);
        }
        if let Ok(val) = std::env::var("GARAGELAMP_MQTT_PASSWORD") {
            self.mqtt.password = Some(val);
        }
        if let Ok(val) = std::env::var("GARAGELAMP_GPIO_BACKEND") {
            if let Some(backend) = GpioBackend::from_name(&val) {
                self.gpio.backend = backend;
            }
        }
        if let Ok(val) = std::env::var("GARAGELAMP_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.mqtt.broker_port == 0 {
            return Err(ConfigError::Validation(
                "mqtt broker port must be non-zero".to_string(),
            ));
        }
        if self.mqtt.broker_host.is_empty() {
            return Err(ConfigError::Validation(
                "mqtt broker host must not be empty".to_string(),
            ));
        }
        self.controller.validate()?;
        if self.gpio.backend == GpioBackend::Rppal {
            self.gpio.pins.validate()?;
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
    #[error("invalid controller configuration")]
    Controller(#[from] ControllerConfigError),
    #[error("invalid pin configuration")]
    Pins(#[from] GpioError),
}
