//! Cumulative damage over a resettable lifetime.
//!
//! The meter keeps two of these: one for the whole session and one for the
//! current area instance.

/// Floor for scope duration when it is used as a divisor.
pub const SCOPE_EPSILON_SECS: f64 = 0.0001;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScopeAccumulator {
    total: u64,
    scope_start: f64,
}

impl ScopeAccumulator {
    pub fn starting_at(now: f64) -> Self {
        Self {
            total: 0,
            scope_start: now,
        }
    }

    pub fn accumulate(&mut self, amount: u64) {
        self.total = self.total.saturating_add(amount);
    }

    /// Average damage per second since the scope started.
    pub fn average_rate(&self, now: f64) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.total as f64 / (now - self.scope_start).max(SCOPE_EPSILON_SECS)
    }

    /// Start a new scope at `now`.
    pub fn reset_scope(&mut self, now: f64) {
        self.total = 0;
        self.scope_start = now;
    }

    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    #[inline]
    pub fn scope_start(&self) -> f64 {
        self.scope_start
    }

    /// Seconds since the scope started.
    pub fn elapsed(&self, now: f64) -> f64 {
        (now - self.scope_start).max(0.0)
    }
}
