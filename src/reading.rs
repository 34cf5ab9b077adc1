//! ==============================================================================
//! reading.rs - simulated sensor reading payload
//! ==============================================================================
//!
//! purpose:
//!     defines the json payload posted to the ingestion endpoint and the
//!     random draw that produces its value.
//!
//! relationships:
//!     - used by: pusher.rs (builds one reading per iteration)
//!     - used by: transport.rs (serializes it as the request body)
//!     - reads: config.rs (SensorConfig holds the fixed literals)
//!
//! ==============================================================================

use rand::Rng;
use serde::Serialize;

use crate::config::SensorConfig;

pub const DEFAULT_LOCATION_ID: &str = "pulau_komodo";
pub const DEFAULT_SENSOR_ID: &str = "komodo_sst_01";
pub const DEFAULT_SENSOR_TYPE: &str = "sst";
pub const DEFAULT_UNIT: &str = "°C";
pub const DEFAULT_SOURCE: &str = "sim";

pub const DEFAULT_MIN_VALUE: f64 = 28.0;
pub const DEFAULT_MAX_VALUE: f64 = 32.5;

/// sst level above which the backend raises a notification
pub const DEFAULT_ALERT_THRESHOLD: f64 = 30.0;

/// one simulated measurement, as sent over the wire
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    /// physical site (e.g., "pulau_komodo")
    pub location_id: String,
    /// originating sensor (e.g., "komodo_sst_01")
    pub sensor_id: String,
    /// measurement kind (e.g., "sst")
    pub sensor_type: String,
    /// measured value, two decimal places
    pub value: f64,
    pub unit: String,
    /// marks the payload as simulated
    pub source: String,
}

impl Reading {
    pub fn new(sensor: &SensorConfig, value: f64) -> Self {
        Self {
            location_id: sensor.location_id.clone(),
            sensor_id: sensor.sensor_id.clone(),
            sensor_type: sensor.sensor_type.clone(),
            value,
            unit: sensor.unit.clone(),
            source: sensor.source.clone(),
        }
    }

    /// same comparison the backend uses before creating a notification
    pub fn exceeds(&self, threshold: f64) -> bool {
        self.value > threshold
    }
}

/// round to two decimal places
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// uniform draw in `[min, max]`, rounded to two decimals
///
/// caller guarantees `min <= max` and that both bounds are whole cents
/// (see `PusherConfig::validate`), otherwise rounding can leave the range.
pub fn draw_value<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    round_to_cents(rng.gen_range(min..=max))
}
