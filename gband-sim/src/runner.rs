//! The feed loop
//!
//! Drives a telemetry source at a fixed cadence: generate a record, hand it
//! to the sink, log the outcome, wait out the period. Delivery failures are
//! logged observations; the loop itself only ends when the cancellation
//! token fires.

use crate::sink::Sink;
use gband_core::source::TelemetrySource;
use std::time::Duration;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Run the generate-and-transmit cycle until `cancel` fires. Returns the
/// number of ticks executed.
pub async fn run<S: TelemetrySource>(
    source: &mut S,
    sink: &dyn Sink,
    period: Duration,
    cancel: CancellationToken,
) -> u64 {
    let mut ticks = 0u64;

    loop {
        if cancel.is_cancelled() {
            break;
        }

        let record = source.next_record();
        ticks += 1;

        match sink.send(&record).await {
            Ok(delivery) => {
                info!(
                    "{} -> {} {}",
                    record.device_id, delivery.status, delivery.body
                );
            }
            Err(e) => {
                error!("{} -> {:#}", record.device_id, e);
            }
        }

        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = sleep(period) => {}
        }
    }

    ticks
}
