//! End-to-end scenarios driven through the public `DpsMeter` surface.

use dpsmeter_core::metrics::DamageWindow;
use dpsmeter_core::panel::{panel_rows, progress_fraction, sparkline};
use dpsmeter_core::{DisplaySettings, DpsMeter, MeterConfig, ObservedEntity};

fn config(window: f32, idle: f32, floor: f32) -> MeterConfig {
    MeterConfig {
        window_length_secs: window,
        idle_reset_secs: idle,
        min_damage_sample: floor,
    }
}

fn one(id: u64, health: i64) -> Vec<ObservedEntity> {
    vec![ObservedEntity::new(id, health)]
}

#[test]
fn baseline_then_hit_gives_windowed_rate() {
    let mut meter = DpsMeter::new(config(8.0, 4.0, 0.0));
    meter.sample(1.0, &one(1, 1000));
    assert_eq!(meter.rolling_dps(), 0.0);

    meter.sample(1.0, &one(1, 700));
    assert_eq!(meter.rolling_dps(), 37.5);
}

#[test]
fn hit_under_floor_leaves_rate_and_peak_at_zero() {
    let mut meter = DpsMeter::new(config(8.0, 4.0, 500.0));
    meter.sample(1.0, &one(1, 1000));
    meter.sample(1.0, &one(1, 700));
    assert_eq!(meter.rolling_dps(), 0.0);
    assert_eq!(meter.peak_dps(), 0.0);
}

#[test]
fn window_evicts_sample_older_than_length() {
    let mut window = DamageWindow::new();
    window.push(0.0, 100);
    window.push(5.0, 50);
    window.evict(9.0, 8.0);

    let remaining: Vec<_> = window.iter().map(|s| (s.timestamp, s.amount)).collect();
    assert_eq!(remaining, vec![(5.0, 50)]);
    assert_eq!(window.windowed_rate(8.0), 6.25);
}

#[test]
fn idle_monitor_clears_window_and_keeps_totals() {
    let mut meter = DpsMeter::new(config(8.0, 4.0, 0.0));
    meter.sample(9.0, &one(1, 1000));
    meter.sample(1.0, &one(1, 600)); // last sample at t=10
    let outcome = meter.sample(5.0, &one(1, 600)); // t=15

    assert!(outcome.idle_cleared);
    assert_eq!(meter.window_samples().count(), 0);
    assert_eq!(meter.session_damage(), 400);
    assert_eq!(meter.area_damage(), 400);
}

#[test]
fn scope_boundary_resets_area_and_keeps_session() {
    let mut meter = DpsMeter::new(config(8.0, 4.0, 0.0));
    meter.sample(10.0, &one(1, 1000));
    meter.sample(10.0, &one(1, 500)); // t=20, area total 500

    meter.on_scope_boundary();
    assert_eq!(meter.area_damage(), 0);
    assert_eq!(meter.area_scope().scope_start(), 20.0);
    assert_eq!(meter.session_damage(), 500);

    meter.sample(5.0, &[]); // t=25
    assert_eq!(meter.area_dps(), 0.0);
}

#[test]
fn panel_data_follows_meter_state() {
    let mut meter = DpsMeter::new(config(8.0, 0.0, 0.0));
    meter.sample(1.0, &one(1, 10_000));
    meter.sample(1.0, &one(1, 2_000));

    let display = DisplaySettings {
        show_rolling: true,
        show_max: true,
        show_session: true,
        show_area: true,
        ..Default::default()
    };
    let readout = meter.readout();
    let rows = panel_rows(&readout, &display);
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0].text, "1K");
    assert_eq!(progress_fraction(&readout, &display), Some(1.0));

    let points = sparkline(meter.window_samples(), meter.now(), meter.config(), &display);
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].y, 1.0);
}

#[test]
fn readout_serializes_to_json() {
    let mut meter = DpsMeter::default();
    meter.sample(1.0, &one(1, 100));
    meter.sample(1.0, &one(1, 20));
    let json = serde_json::to_value(meter.readout()).unwrap();
    assert_eq!(json["session_damage"].as_u64(), Some(80));
    assert_eq!(json["window_samples"].as_u64(), Some(1));
}
