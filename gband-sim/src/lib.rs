//! Guardian Band wearable simulator
//!
//! Emulates a collar device: evolves a position by a bounded random walk,
//! synthesizes vitals/motion/battery readings each tick, and posts the
//! resulting record to an ingest endpoint at a fixed cadence.

pub mod band;
pub mod config;
pub mod runner;
pub mod sink;

pub use band::SimulatedBand;
pub use config::SimulatorConfig;
pub use sink::{Delivery, HttpSink, Sink, TransmissionError};
