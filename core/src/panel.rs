//! Panel data helpers
//!
//! Converts a [`MeterReadout`] into the rows, headline, progress fraction and
//! sparkline points a renderer draws. Nothing here draws or measures text.

use dpsmeter_types::formatting::format_rate;
use dpsmeter_types::{DisplaySettings, MeterConfig};
use serde::Serialize;

use crate::meter::MeterReadout;
use crate::metrics::DamageSample;

/// Floor for the peak when used as the progress bar's divisor.
const PROGRESS_EPSILON: f64 = 0.001;

/// Which aggregate a panel row shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PanelMetric {
    Rolling,
    Max,
    Session,
    Area,
}

impl PanelMetric {
    pub fn all() -> &'static [PanelMetric] {
        &[Self::Rolling, Self::Max, Self::Session, Self::Area]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Rolling => "Rolling DPS",
            Self::Max => "Max DPS",
            Self::Session => "Session DPS",
            Self::Area => "Area DPS",
        }
    }

    fn enabled(&self, display: &DisplaySettings) -> bool {
        match self {
            Self::Rolling => display.show_rolling,
            Self::Max => display.show_max,
            Self::Session => display.show_session,
            Self::Area => display.show_area,
        }
    }

    fn value(&self, readout: &MeterReadout) -> f64 {
        match self {
            Self::Rolling => readout.rolling_dps,
            Self::Max => readout.peak_dps,
            Self::Session => readout.session_dps,
            Self::Area => readout.area_dps,
        }
    }
}

/// One labelled value on the panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelRow {
    pub metric: PanelMetric,
    pub label: &'static str,
    pub value: f64,
    pub text: String,
}

/// A sparkline vertex, both axes normalized to `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SparkPoint {
    pub x: f32,
    pub y: f32,
}

/// Build the panel rows enabled in `display`, in fixed order.
pub fn panel_rows(readout: &MeterReadout, display: &DisplaySettings) -> Vec<PanelRow> {
    PanelMetric::all()
        .iter()
        .filter(|metric| metric.enabled(display))
        .map(|metric| {
            let value = metric.value(readout);
            PanelRow {
                metric: *metric,
                label: metric.label(),
                value,
                text: format_rate(value, display.humanize_numbers, display.european_numbers),
            }
        })
        .collect()
}

/// The large rolling-rate figure at the top of the panel.
pub fn headline(readout: &MeterReadout, display: &DisplaySettings) -> String {
    format_rate(
        readout.rolling_dps,
        display.humanize_numbers,
        display.european_numbers,
    )
}

/// Rolling rate as a fraction of the peak.
///
/// Only shown when both rolling and max rows are enabled and a peak exists.
pub fn progress_fraction(readout: &MeterReadout, display: &DisplaySettings) -> Option<f32> {
    if !(display.show_rolling && display.show_max) || readout.peak_dps <= 0.0 {
        return None;
    }
    let fraction = readout.rolling_dps / readout.peak_dps.max(PROGRESS_EPSILON);
    Some(fraction.clamp(0.0, 1.0) as f32)
}

/// Normalize window samples for a sparkline spanning the trailing window.
///
/// `x` is the sample's position within `[now - span, now]`, `y` its amount
/// relative to the largest amount in the window (never less than 1).
pub fn sparkline<'a>(
    samples: impl IntoIterator<Item = &'a DamageSample>,
    now: f64,
    config: &MeterConfig,
    display: &DisplaySettings,
) -> Vec<SparkPoint> {
    if !display.show_sparkline {
        return Vec::new();
    }

    let samples: Vec<&DamageSample> = samples.into_iter().collect();
    let span = config.window_denominator();
    let start = now - span;
    let max_amount = samples
        .iter()
        .map(|s| s.amount)
        .max()
        .unwrap_or(1)
        .max(1) as f64;

    samples
        .iter()
        .map(|s| SparkPoint {
            x: ((s.timestamp - start) / span).clamp(0.0, 1.0) as f32,
            y: (s.amount as f64 / max_amount) as f32,
        })
        .collect()
}
