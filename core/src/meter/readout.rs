use serde::Serialize;

/// Read-only view of the meter's aggregates for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeterReadout {
    pub now: f64,
    pub rolling_dps: f64,
    pub peak_dps: f64,
    pub session_dps: f64,
    pub area_dps: f64,
    pub session_damage: u64,
    pub area_damage: u64,
    pub session_elapsed: f64,
    pub area_elapsed: f64,
    pub window_samples: usize,
    pub tracked_entities: usize,
}

/// What a single `sample` call did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutcome {
    pub now: f64,
    /// Summed health decrease before the noise floor.
    pub raw_damage: u64,
    /// Damage that made it past the floor, if any.
    pub admitted: Option<u64>,
    /// Samples that aged out of the window this tick.
    pub evicted: usize,
    pub idle_cleared: bool,
    /// The meter was disabled and did nothing.
    pub skipped: bool,
}

impl TickOutcome {
    pub(crate) fn skipped(now: f64) -> Self {
        Self {
            now,
            raw_damage: 0,
            admitted: None,
            evicted: 0,
            idle_cleared: false,
            skipped: true,
        }
    }
}
