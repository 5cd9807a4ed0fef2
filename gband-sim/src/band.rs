//! Simulated wearable device
//!
//! Produces the telemetry a real Guardian Band collar would report: a
//! position that wanders inside a configurable per-tick bound, and vitals,
//! motion and battery readings sampled fresh on every tick. An optional
//! breach bias pushes the position steadily away from its starting area to
//! exercise geofence handling downstream.

use crate::config::SimulatorConfig;
use chrono::Utc;
use gband_core::model::{Location, Motion, TelemetryRecord, Vitals};
use gband_core::source::TelemetrySource;
use gband_core::units::{Celsius, GForce, Volts};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Breach mode adds this multiple of the drift magnitude to both axes,
/// every tick, in a fixed direction.
const BREACH_BIAS_FACTOR: f64 = 10.0;

/// Position owned by the device, mutated once per tick, never clamped.
#[derive(Debug, Clone, Copy)]
struct DeviceState {
    latitude: f64,
    longitude: f64,
}

pub struct SimulatedBand {
    device_id: String,
    drift_magnitude: f64,
    breach_mode: bool,
    state: DeviceState,
    rng: StdRng,
}

impl SimulatedBand {
    pub fn new(config: &SimulatorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            device_id: config.device_id.clone(),
            drift_magnitude: config.drift_magnitude,
            breach_mode: config.breach_mode,
            state: DeviceState {
                latitude: config.initial_latitude,
                longitude: config.initial_longitude,
            },
            rng,
        }
    }

    /// Current position, as of the most recent tick
    pub fn position(&self) -> (f64, f64) {
        (self.state.latitude, self.state.longitude)
    }

    /// One bounded random-walk step; each axis moves independently by a
    /// uniform draw in [-0.5, 0.5) scaled by the drift magnitude.
    fn step_position(&mut self) {
        self.state.latitude += (self.rng.gen::<f64>() - 0.5) * self.drift_magnitude;
        self.state.longitude += (self.rng.gen::<f64>() - 0.5) * self.drift_magnitude;

        if self.breach_mode {
            self.state.latitude += self.drift_magnitude * BREACH_BIAS_FACTOR;
            self.state.longitude += self.drift_magnitude * BREACH_BIAS_FACTOR;
        }
    }

    /// Sample vitals, motion and battery for this tick. Readings are
    /// independent draws each tick, uncorrelated with previous values.
    fn sample_readings(&mut self) -> (Vitals, Motion, Volts) {
        let vitals = Vitals {
            hr: self.rng.gen_range(40..=120),
            temp_c: Celsius::new(self.rng.gen_range(36.0..=39.5)),
        };
        let motion = Motion {
            ax: GForce::new(self.rng.gen_range(-1.0..=1.0)),
            ay: GForce::new(self.rng.gen_range(-1.0..=1.0)),
            az: GForce::new(self.rng.gen_range(0.0..=1.0)),
        };
        let battery = Volts::new(self.rng.gen_range(3.6..=4.2));

        (vitals, motion, battery)
    }
}

impl TelemetrySource for SimulatedBand {
    fn device_id(&self) -> &str {
        &self.device_id
    }

    fn next_record(&mut self) -> TelemetryRecord {
        self.step_position();
        let (vitals, motion, battery) = self.sample_readings();

        TelemetryRecord {
            device_id: self.device_id.clone(),
            timestamp_ms: Utc::now().timestamp_millis(),
            location: Location {
                lat: self.state.latitude,
                lon: self.state.longitude,
            },
            vitals,
            motion,
            battery,
        }
    }
}
