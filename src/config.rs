//! ==============================================================================
//! config.rs - Pusher Configuration Loader
//! ==============================================================================
//!
//! purpose:
//!     defines the schema for `pusher.toml`.
//!     loads configuration from file or falls back to defaults.
//!     the defaults are the fixed values of the original simulator, so a run
//!     without any config file posts ten pulau_komodo sst readings to
//!     http://localhost:4000/ingest, half a second apart.
//!
//! structure:
//!     - TargetConfig: where readings are posted.
//!     - ScheduleConfig: how many readings and how far apart.
//!     - SensorConfig: the literal payload fields and the value range.
//!     - LoggingConfig: stderr log verbosity.
//!
//! ==============================================================================

use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::reading;

pub const DEFAULT_INGEST_URL: &str = "http://localhost:4000/ingest";

/// Root configuration structure
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PusherConfig {
    pub target: TargetConfig,
    pub schedule: ScheduleConfig,
    pub sensor: SensorConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TargetConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ScheduleConfig {
    /// readings per run
    pub count: u32,
    pub interval_ms: u64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SensorConfig {
    pub location_id: String,
    pub sensor_id: String,
    pub sensor_type: String,
    pub unit: String,
    pub source: String,
    pub min_value: f64,
    pub max_value: f64,
    /// readings above this are logged as anomalies
    pub alert_threshold: Option<f64>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self { url: DEFAULT_INGEST_URL.to_string() }
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self { count: 10, interval_ms: 500 }
    }
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            location_id: reading::DEFAULT_LOCATION_ID.to_string(),
            sensor_id: reading::DEFAULT_SENSOR_ID.to_string(),
            sensor_type: reading::DEFAULT_SENSOR_TYPE.to_string(),
            unit: reading::DEFAULT_UNIT.to_string(),
            source: reading::DEFAULT_SOURCE.to_string(),
            min_value: reading::DEFAULT_MIN_VALUE,
            max_value: reading::DEFAULT_MAX_VALUE,
            alert_threshold: Some(reading::DEFAULT_ALERT_THRESHOLD),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string() }
    }
}

impl ScheduleConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl PusherConfig {
    /// Load configuration from file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: PusherConfig = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config: {}", e))?;

        config.validate()?;
        Ok(config)
    }

    /// Load with default fallback
    pub fn load_or_default() -> Self {
        let paths = [
            PathBuf::from("config").join("pusher.toml"),
            PathBuf::from("..").join("config").join("pusher.toml"),
        ];
        Self::load_first_of(&paths)
    }

    fn load_first_of(paths: &[PathBuf]) -> Self {
        for path in paths {
            if path.exists() {
                match Self::load(path) {
                    Ok(config) => {
                        tracing::info!("[CONFIG] Loaded from {}", path.display());
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("[CONFIG] Failed to load {}: {:#}", path.display(), e);
                    }
                }
            }
        }

        tracing::info!("[CONFIG] No config file found - using defaults");
        Self::default()
    }

    /// Reject settings the push loop cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.target.url.trim().is_empty() {
            bail!("target.url must not be empty");
        }
        let sensor = &self.sensor;
        if !sensor.min_value.is_finite() || !sensor.max_value.is_finite() {
            bail!("sensor.min_value and sensor.max_value must be finite numbers");
        }
        if !(sensor.max_value - sensor.min_value).is_finite() {
            bail!(
                "sensor value range [{}, {}] is too wide",
                sensor.min_value,
                sensor.max_value
            );
        }
        // rounded draws only stay inside bounds that are whole cents
        for (name, bound) in [("min_value", sensor.min_value), ("max_value", sensor.max_value)] {
            if reading::round_to_cents(bound) != bound {
                bail!("sensor.{} ({}) has more than two decimal places", name, bound);
            }
        }
        if sensor.min_value > sensor.max_value {
            bail!(
                "sensor.min_value ({}) is greater than sensor.max_value ({})",
                sensor.min_value,
                sensor.max_value
            );
        }
        Ok(())
    }

    /// Log configuration summary
    pub fn log_summary(&self) {
        tracing::info!("Target: {}", self.target.url);
        tracing::info!(
            "Schedule: {} readings, {}ms apart",
            self.schedule.count,
            self.schedule.interval_ms
        );
        tracing::info!(
            "Sensor: {}/{} ({}) in [{}, {}] {}",
            self.sensor.location_id,
            self.sensor.sensor_id,
            self.sensor.sensor_type,
            self.sensor.min_value,
            self.sensor.max_value,
            self.sensor.unit
        );
    }
}
