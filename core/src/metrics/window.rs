//! Sliding window of admitted damage.
//!
//! Samples arrive in timestamp order because the meter clock is monotonic, so
//! eviction only ever looks at the head. A running sum is kept next to the
//! queue so the rate does not rescan it every tick.

use std::collections::VecDeque;

/// One admitted damage event on the logical timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageSample {
    pub timestamp: f64,
    pub amount: u64,
}

#[derive(Debug, Clone, Default)]
pub struct DamageWindow {
    samples: VecDeque<DamageSample>,
    total: u64,
}

impl DamageWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sample at the tail.
    pub fn push(&mut self, timestamp: f64, amount: u64) {
        self.samples.push_back(DamageSample { timestamp, amount });
        self.total = self.total.saturating_add(amount);
    }

    /// Drop samples from the head while they are older than `window_length`.
    ///
    /// Age is compared with strict greater-than, so a sample sitting exactly on
    /// the boundary survives one more tick. Returns the number evicted.
    pub fn evict(&mut self, now: f64, window_length: f64) -> usize {
        let mut evicted = 0;
        while let Some(head) = self.samples.front() {
            if now - head.timestamp <= window_length {
                break;
            }
            self.total = self.total.saturating_sub(head.amount);
            self.samples.pop_front();
            evicted += 1;
        }
        if self.samples.is_empty() {
            self.total = 0;
        }
        evicted
    }

    /// Sum of amounts in the window divided by `denominator`.
    ///
    /// `denominator` must be positive; see [`dpsmeter_types::MeterConfig::window_denominator`].
    pub fn windowed_rate(&self, denominator: f64) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.total as f64 / denominator
    }

    pub fn clear(&mut self) {
        self.samples.clear();
        self.total = 0;
    }

    /// Timestamp of the newest sample.
    pub fn last_sample_time(&self) -> Option<f64> {
        self.samples.back().map(|s| s.timestamp)
    }

    /// Samples oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DamageSample> {
        self.samples.iter()
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
