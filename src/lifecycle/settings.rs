//! Runtime settings, layered with the `config` crate:
//!
//! 1. built-in defaults,
//! 2. an optional `rider-tracker.yaml` next to the binary's working directory,
//! 3. `RIDER_TRACKER_*` environment variables (nested keys use `__`, for example
//!    `RIDER_TRACKER_USER_LOCATION__LATITUDE`).

use crate::backend::MOCK_RESTAURANT_ORIGIN;
use crate::geo::GeoPoint;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;
pub const DEFAULT_MAILBOX_SIZE: usize = 32;
/// Where the customer is assumed to be when an order names no destination.
pub const DEFAULT_USER_LOCATION: GeoPoint = GeoPoint::new(13.736717, 100.534847);

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    /// Wall-clock length of one simulated second.
    pub tick_interval_ms: u64,
    /// Capacity of each actor's mailbox.
    pub mailbox_size: usize,
    /// Restaurant origin used when the backend's order reply has none.
    pub default_origin: GeoPoint,
    /// Destination used when an order is placed without one.
    pub user_location: GeoPoint,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            mailbox_size: DEFAULT_MAILBOX_SIZE,
            default_origin: MOCK_RESTAURANT_ORIGIN,
            user_location: DEFAULT_USER_LOCATION,
        }
    }
}

impl Settings {
    /// Loads defaults, then `rider-tracker.yaml` if present, then the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let config = defaults()?
            .add_source(File::with_name("rider-tracker").required(false))
            .add_source(
                Environment::with_prefix("RIDER_TRACKER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        config.try_deserialize::<Settings>()?.validated()
    }

    /// Loads defaults overlaid with a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config = defaults()?
            .add_source(File::from_str(yaml, FileFormat::Yaml))
            .build()?;
        config.try_deserialize::<Settings>()?.validated()
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Message(
                "tick_interval_ms must be greater than zero".to_string(),
            ));
        }
        if self.mailbox_size == 0 {
            return Err(ConfigError::Message(
                "mailbox_size must be greater than zero".to_string(),
            ));
        }
        if !self.default_origin.is_finite() || !self.user_location.is_finite() {
            return Err(ConfigError::Message(
                "locations must be finite coordinates".to_string(),
            ));
        }
        Ok(self)
    }
}

fn defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError> {
    let fallback = Settings::default();
    Config::builder()
        .set_default("tick_interval_ms", fallback.tick_interval_ms)?
        .set_default("mailbox_size", fallback.mailbox_size as u64)?
        .set_default("default_origin.latitude", fallback.default_origin.latitude)?
        .set_default("default_origin.longitude", fallback.default_origin.longitude)?
        .set_default("user_location.latitude", fallback.user_location.latitude)?
        .set_default("user_location.longitude", fallback.user_location.longitude)
}
