//! Type-safe wrappers for sampled readings
//!
//! Newtype wrappers around f64 that fix each reading to its reported
//! precision at construction time, so a value carried through the program
//! is always the value that goes on the wire.

use serde::{Deserialize, Serialize};

/// Round to `decimals` decimal places
fn round_dp(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Body temperature in degrees Celsius, 1 decimal place
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Celsius(pub f64);

impl Celsius {
    pub fn new(value: f64) -> Self {
        Self(round_dp(value, 1))
    }
}

/// Battery voltage, 2 decimal places
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Volts(pub f64);

impl Volts {
    pub fn new(value: f64) -> Self {
        Self(round_dp(value, 2))
    }
}

/// Accelerometer axis reading in multiples of g, 3 decimal places
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GForce(pub f64);

impl GForce {
    pub fn new(value: f64) -> Self {
        Self(round_dp(value, 3))
    }
}
