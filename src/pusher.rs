//! ==============================================================================
//! pusher.rs - sample generator / pusher loop
//! ==============================================================================
//!
//! purpose:
//!     draws a value, builds a reading, posts it, prints `<status> <body>`,
//!     waits, and repeats a fixed number of times.
//!
//! behaviour:
//!     - strictly sequential: a request finishes before the next one starts
//!     - any http status is printed as-is and the loop carries on
//!     - a transport failure ends the run right away (no retry); nothing is
//!       printed for that iteration or any later one
//!
//! relationships:
//!     - used by: main.rs
//!     - uses: reading.rs (draw_value, Reading), transport.rs (Transport)
//!
//! ==============================================================================

use anyhow::{Context, Result};
use rand::Rng;
use std::io::Write;

use crate::config::PusherConfig;
use crate::reading::{draw_value, Reading};
use crate::transport::Transport;

/// what a completed run did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub sent: u32,
    /// readings above the configured alert threshold
    pub above_threshold: u32,
}

pub async fn run<T, R, W>(
    config: &PusherConfig,
    transport: &T,
    rng: &mut R,
    out: &mut W,
) -> Result<RunSummary>
where
    T: Transport,
    R: Rng + ?Sized,
    W: Write,
{
    let sensor = &config.sensor;
    let url = config.target.url.as_str();
    let interval = config.schedule.interval();
    let mut summary = RunSummary::default();

    for i in 1..=config.schedule.count {
        let value = draw_value(rng, sensor.min_value, sensor.max_value);
        let reading = Reading::new(sensor, value);
        tracing::debug!("[PUSH] #{} {}={}{}", i, reading.sensor_type, reading.value, reading.unit);

        if let Some(threshold) = sensor.alert_threshold {
            if reading.exceeds(threshold) {
                summary.above_threshold += 1;
                tracing::warn!(
                    "[PUSH] #{} {} {}={} > {}",
                    i,
                    reading.location_id,
                    reading.sensor_type,
                    reading.value,
                    threshold
                );
            }
        }

        let response = transport.post_json(url, &reading).await?;
        writeln!(out, "{} {}", response.status, response.body)
            .and_then(|_| out.flush())
            .context("Failed to write response line")?;
        summary.sent += 1;

        tokio::time::sleep(interval).await;
    }

    tracing::info!(
        "[PUSH] Done: {} readings sent, {} above threshold",
        summary.sent,
        summary.above_threshold
    );
    Ok(summary)
}
