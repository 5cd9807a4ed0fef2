//! Behavioral tests for the simulated band

use gband_core::source::TelemetrySource;
use gband_sim::{SimulatedBand, SimulatorConfig};

fn config(drift: f64, breach: bool, seed: u64) -> SimulatorConfig {
    SimulatorConfig {
        server_base_url: "http://localhost:3000".to_string(),
        device_id: "GB-sim-0001".to_string(),
        period_seconds: 5.0,
        initial_latitude: 12.34,
        initial_longitude: 56.78,
        drift_magnitude: drift,
        breach_mode: breach,
        seed: Some(seed),
    }
}

/// True if `value` already sits on the `decimals`-place rounding grid
fn is_rounded_to(value: f64, decimals: i32) -> bool {
    let factor = 10f64.powi(decimals);
    ((value * factor).round() / factor - value).abs() < 1e-12
}

#[test]
fn test_walk_stays_within_drift_bound() {
    let drift = 0.001;
    let mut band = SimulatedBand::new(&config(drift, false, 7));

    let (mut lat, mut lon) = band.position();
    for _ in 0..10_000 {
        let record = band.next_record();
        let dlat = record.location.lat - lat;
        let dlon = record.location.lon - lon;
        assert!(
            dlat.abs() <= drift / 2.0 + 1e-12,
            "per-tick latitude change {} exceeds drift bound {}",
            dlat,
            drift / 2.0
        );
        assert!(
            dlon.abs() <= drift / 2.0 + 1e-12,
            "per-tick longitude change {} exceeds drift bound {}",
            dlon,
            drift / 2.0
        );
        lat = record.location.lat;
        lon = record.location.lon;
    }
}

#[test]
fn test_breach_bias_shifts_every_tick() {
    let drift = 0.0005;
    let mut band = SimulatedBand::new(&config(drift, true, 7));

    let (mut lat, mut lon) = band.position();
    for _ in 0..1_000 {
        let record = band.next_record();
        let dlat = record.location.lat - lat;
        let dlon = record.location.lon - lon;
        // Fixed 10x bias plus a random term bounded by half the drift
        assert!(
            (9.5 * drift - 1e-12..=10.5 * drift + 1e-12).contains(&dlat),
            "breach-mode latitude change {} outside [{}, {}]",
            dlat,
            9.5 * drift,
            10.5 * drift
        );
        assert!(
            (9.5 * drift - 1e-12..=10.5 * drift + 1e-12).contains(&dlon),
            "breach-mode longitude change {} outside [{}, {}]",
            dlon,
            9.5 * drift,
            10.5 * drift
        );
        lat = record.location.lat;
        lon = record.location.lon;
    }
}

#[test]
fn test_field_ranges_over_many_records() {
    let mut band = SimulatedBand::new(&config(0.0005, false, 42));

    for _ in 0..10_000 {
        let record = band.next_record();

        let hr = record.vitals.hr;
        assert!(
            (40..=120).contains(&hr),
            "heart rate {} out of range",
            hr
        );

        let temp = record.vitals.temp_c.0;
        assert!(
            (36.0..=39.5).contains(&temp),
            "temperature {} out of range",
            temp
        );
        assert!(is_rounded_to(temp, 1), "temperature {} not at 1 decimal", temp);

        for (axis, value, lo) in [
            ("ax", record.motion.ax.0, -1.0),
            ("ay", record.motion.ay.0, -1.0),
            ("az", record.motion.az.0, 0.0),
        ] {
            assert!(
                (lo..=1.0).contains(&value),
                "{} value {} out of range",
                axis,
                value
            );
            assert!(is_rounded_to(value, 3), "{} value {} not at 3 decimals", axis, value);
        }

        let battery = record.battery.0;
        assert!(
            (3.6..=4.2).contains(&battery),
            "battery {} out of range",
            battery
        );
        assert!(is_rounded_to(battery, 2), "battery {} not at 2 decimals", battery);
    }
}

#[test]
fn test_same_seed_reproduces_trajectory() {
    let mut a = SimulatedBand::new(&config(0.0005, false, 1234));
    let mut b = SimulatedBand::new(&config(0.0005, false, 1234));

    for tick in 0..500 {
        let ra = a.next_record();
        let rb = b.next_record();
        // Everything except the wall-clock timestamp must match
        assert_eq!(ra.location, rb.location, "positions diverged at tick {}", tick);
        assert_eq!(ra.vitals, rb.vitals, "vitals diverged at tick {}", tick);
        assert_eq!(ra.motion, rb.motion, "motion diverged at tick {}", tick);
        assert_eq!(ra.battery, rb.battery, "battery diverged at tick {}", tick);
    }
}

#[test]
fn test_different_seeds_diverge() {
    let mut a = SimulatedBand::new(&config(0.0005, false, 1));
    let mut b = SimulatedBand::new(&config(0.0005, false, 2));

    let diverged = (0..50).any(|_| a.next_record().location != b.next_record().location);
    assert!(diverged, "different seeds should produce different walks");
}

#[test]
fn test_zero_drift_never_moves() {
    let mut band = SimulatedBand::new(&config(0.0, false, 99));

    for _ in 0..1_000 {
        let record = band.next_record();
        assert_eq!(record.location.lat, 12.34);
        assert_eq!(record.location.lon, 56.78);
    }
    assert_eq!(band.position(), (12.34, 56.78));
}

#[test]
fn test_record_location_matches_state_after_tick() {
    let mut band = SimulatedBand::new(&config(0.0005, true, 5));

    for _ in 0..200 {
        let record = band.next_record();
        let (lat, lon) = band.position();
        assert_eq!(record.location.lat, lat, "record built from stale latitude");
        assert_eq!(record.location.lon, lon, "record built from stale longitude");
    }
}

#[test]
fn test_device_id_is_stamped_on_records() {
    let mut band = SimulatedBand::new(&config(0.0005, false, 3));
    assert_eq!(band.device_id(), "GB-sim-0001");

    let record = band.next_record();
    assert_eq!(record.device_id, "GB-sim-0001");
}

#[test]
fn test_timestamp_is_epoch_millis() {
    let mut band = SimulatedBand::new(&config(0.0005, false, 3));
    let before = chrono::Utc::now().timestamp_millis();
    let record = band.next_record();
    let after = chrono::Utc::now().timestamp_millis();

    assert!(
        (before..=after).contains(&record.timestamp_ms),
        "timestamp {} outside capture window [{}, {}]",
        record.timestamp_ms,
        before,
        after
    );
}
