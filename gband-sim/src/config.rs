//! Simulator configuration
//!
//! Everything the feed loop needs is fixed here at startup. Validation
//! happens at this boundary; the loop itself assumes the values it is
//! handed are usable.

use anyhow::{bail, Result};
use clap::Parser;

/// Feed synthetic Guardian Band telemetry to an ingest endpoint
#[derive(Parser, Debug, Clone)]
#[command(name = "gband-sim", version, allow_negative_numbers = true)]
pub struct SimulatorConfig {
    /// Base URL of the ingest server
    #[arg(long = "server", default_value = "http://localhost:3000")]
    pub server_base_url: String,

    /// Device identifier stamped on every record
    #[arg(long = "device-id", default_value = "GB-sim-0001")]
    pub device_id: String,

    /// Seconds between transmissions
    #[arg(long = "period", default_value_t = 5.0)]
    pub period_seconds: f64,

    /// Starting latitude in decimal degrees
    #[arg(long = "lat", default_value_t = 12.34)]
    pub initial_latitude: f64,

    /// Starting longitude in decimal degrees
    #[arg(long = "lon", default_value_t = 56.78)]
    pub initial_longitude: f64,

    /// Bound on the per-tick random positional change, in degrees
    #[arg(long = "drift", default_value_t = 0.0005)]
    pub drift_magnitude: f64,

    /// Push the device steadily away from its starting area
    #[arg(long = "breach")]
    pub breach_mode: bool,

    /// Seed for the random source, for reproducible trajectories
    #[arg(long = "seed")]
    pub seed: Option<u64>,
}

impl SimulatorConfig {
    /// Reject values the feed loop is not written to handle
    pub fn validate(&self) -> Result<()> {
        if !self.period_seconds.is_finite() || self.period_seconds <= 0.0 {
            bail!(
                "--period must be a positive number of seconds, got {}",
                self.period_seconds
            );
        }
        if !self.drift_magnitude.is_finite() || self.drift_magnitude < 0.0 {
            bail!(
                "--drift must be a non-negative number of degrees, got {}",
                self.drift_magnitude
            );
        }
        Ok(())
    }
}
