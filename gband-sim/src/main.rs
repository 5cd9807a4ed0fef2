//! Guardian Band Simulator
//!
//! Command-line entry point: parse configuration, wire Ctrl-C to the feed
//! loop's cancellation token, and run until interrupted.

use anyhow::Result;
use clap::Parser;
use gband_sim::{runner, HttpSink, SimulatedBand, SimulatorConfig};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = SimulatorConfig::parse();
    config.validate()?;

    let sink = HttpSink::new(&config.server_base_url)?;
    info!(
        "Simulating {} -> {} every {}s",
        config.device_id,
        sink.url(),
        config.period_seconds
    );
    if config.breach_mode {
        info!("Breach mode on: position will drift steadily away from start");
    }

    let mut band = SimulatedBand::new(&config);
    let period = Duration::from_secs_f64(config.period_seconds);

    let cancel = CancellationToken::new();
    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => signal_cancel.cancel(),
            Err(e) => warn!("Failed to listen for Ctrl-C: {}", e),
        }
    });

    let ticks = runner::run(&mut band, &sink, period, cancel).await;
    info!("Stopped after {} ticks", ticks);

    Ok(())
}
