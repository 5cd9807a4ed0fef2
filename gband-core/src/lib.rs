//! Guardian Band Core Library
//!
//! This crate provides the telemetry record model and the source trait
//! shared by record producers and the delivery loop.

pub mod model;
pub mod source;
pub mod units;

pub use model::{Location, Motion, TelemetryRecord, Vitals};
pub use source::TelemetrySource;
