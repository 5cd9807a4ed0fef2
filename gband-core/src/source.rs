//! Telemetry source trait definition

use crate::model::TelemetryRecord;

/// Trait for telemetry record producers
///
/// A source owns whatever state its records evolve from (for the simulated
/// band, the device's drifting position) and yields exactly one record per
/// call. The delivery loop drives a source without knowing how its records
/// are made.
pub trait TelemetrySource {
    /// Identifier stamped on this source's records
    fn device_id(&self) -> &str;

    /// Advance the source by one tick and return the record captured
    /// immediately after the update
    fn next_record(&mut self) -> TelemetryRecord;
}
