//! Logical timeline for the meter.
//!
//! Frame deltas from the host are folded into a monotonically increasing
//! number of seconds. Every component reads time from here, never from the
//! wall clock.

/// Smallest step the clock will advance by.
pub const MIN_TICK_SECS: f64 = 0.0001;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MeterClock {
    now: f64,
}

impl MeterClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one frame and return the new logical time.
    ///
    /// Zero, negative and non-finite deltas advance by [`MIN_TICK_SECS`].
    /// Large deltas (e.g. after a pause) are taken as-is.
    pub fn advance(&mut self, raw_delta: f64) -> f64 {
        let delta = if raw_delta.is_finite() {
            raw_delta.max(MIN_TICK_SECS)
        } else {
            MIN_TICK_SECS
        };
        self.now += delta;
        self.now
    }

    #[inline]
    pub fn now(&self) -> f64 {
        self.now
    }

    pub fn reset(&mut self) {
        self.now = 0.0;
    }
}
