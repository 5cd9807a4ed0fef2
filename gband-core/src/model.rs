//! Telemetry record model
//!
//! Defines the record a Guardian Band wearable reports each tick. Field
//! names follow the ingest API's wire format exactly, so a record
//! serializes straight into the POST body.

use crate::units::{Celsius, GForce, Volts};
use serde::{Deserialize, Serialize};

/// One telemetry report: position, vitals, motion and battery, captured
/// together at a single tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryRecord {
    /// Opaque identifier of the reporting device
    pub device_id: String,

    /// Capture time, milliseconds since the Unix epoch
    #[serde(rename = "ts")]
    pub timestamp_ms: i64,

    /// Position after this tick's update
    pub location: Location,

    /// Heart rate and body temperature
    pub vitals: Vitals,

    /// Accelerometer axes
    pub motion: Motion,

    /// Battery voltage
    pub battery: Volts,
}

/// Geographic position in decimal degrees, full precision
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

/// Vital signs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vitals {
    /// Heart rate in beats per minute
    pub hr: u8,

    /// Body temperature
    #[serde(rename = "tempC")]
    pub temp_c: Celsius,
}

/// Simulated accelerometer reading; ax/ay swing around rest, az stays
/// non-negative (gravity component)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Motion {
    pub ax: GForce,
    pub ay: GForce,
    pub az: GForce,
}
