/// Highest windowed rate seen since the last reset. Never decays.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PeakTracker {
    peak: f64,
}

impl PeakTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, windowed_rate: f64) {
        if windowed_rate > self.peak {
            self.peak = windowed_rate;
        }
    }

    pub fn reset(&mut self) {
        self.peak = 0.0;
    }

    #[inline]
    pub fn peak(&self) -> f64 {
        self.peak
    }
}
