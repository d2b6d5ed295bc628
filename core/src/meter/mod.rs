//! The sampling engine.
//!
//! [`DpsMeter`] owns every aggregate and is driven by the host once per frame.
//! Per tick:
//! 1. the clock advances by the frame delta
//! 2. the health tracker turns the entity snapshot into raw damage and prunes
//!    vanished entities
//! 3. the noise floor admits (or drops) that damage
//! 4. admitted damage enters the window and both scope totals
//! 5. expired samples leave the window
//! 6. the peak follows the new windowed rate
//! 7. an idle window is cleared, totals untouched

mod readout;


pub use readout::{MeterReadout, TickOutcome};

use dpsmeter_types::MeterConfig;

use crate::clock::MeterClock;
use crate::entity::{EntityId, HealthTracker, ObservedEntity};
use crate::events::{MeterSignal, SignalHandler};
use crate::metrics::{
    DamageSample, DamageWindow, PeakTracker, ScopeAccumulator, admit, should_clear_window,
};

/// Single-owner engine state. Not synchronized: the host serializes calls.
#[derive(Debug)]
pub struct DpsMeter {
    config: MeterConfig,
    enabled: bool,
    clock: MeterClock,
    tracker: HealthTracker,
    window: DamageWindow,
    /// Windowed rate as of the latest tick.
    rolling: f64,
    peak: PeakTracker,
    session: ScopeAccumulator,
    area: ScopeAccumulator,
}

impl Default for DpsMeter {
    fn default() -> Self {
        Self::new(MeterConfig::default())
    }
}

impl DpsMeter {
    /// Create an enabled meter with a clean state at logical time zero.
    pub fn new(config: MeterConfig) -> Self {
        Self {
            config,
            enabled: true,
            clock: MeterClock::new(),
            tracker: HealthTracker::new(),
            window: DamageWindow::new(),
            rolling: 0.0,
            peak: PeakTracker::new(),
            session: ScopeAccumulator::starting_at(0.0),
            area: ScopeAccumulator::starting_at(0.0),
        }
    }

    // --- Tick ---

    /// Process one frame. Ignored while the meter is disabled.
    pub fn sample(&mut self, delta_time: f64, entities: &[ObservedEntity]) -> TickOutcome {
        if !self.enabled {
            tracing::debug!("Sample ignored, meter disabled");
            return TickOutcome::skipped(self.clock.now());
        }

        let now = self.clock.advance(delta_time);
        let raw_damage = self.tracker.observe(entities);

        let admitted = admit(raw_damage, self.config.min_damage_sample);
        if let Some(amount) = admitted {
            self.window.push(now, amount);
            self.session.accumulate(amount);
            self.area.accumulate(amount);
        }

        let evicted = self.window.evict(now, self.config.window_length());
        self.rolling = self
            .window
            .windowed_rate(self.config.window_denominator());
        self.peak.update(self.rolling);

        let idle_cleared = should_clear_window(
            now,
            self.window.last_sample_time(),
            f64::from(self.config.idle_reset_secs),
        );
        if idle_cleared {
            tracing::debug!(
                now,
                idle_reset_secs = self.config.idle_reset_secs,
                "Rolling window idle, clearing"
            );
            self.window.clear();
            self.rolling = 0.0;
        }

        TickOutcome {
            now,
            raw_damage,
            admitted,
            evicted,
            idle_cleared,
            skipped: false,
        }
    }

    // --- Lifecycle ---

    /// Area-instance boundary: clears the window, the area total and every
    /// entity baseline. Session total and peak are kept.
    pub fn on_scope_boundary(&mut self) {
        let now = self.clock.now();
        self.window.clear();
        self.rolling = 0.0;
        self.area.reset_scope(now);
        self.tracker.clear();
        tracing::info!(now, session_damage = self.session.total(), "Area scope reset");
    }

    /// User-initiated reset of session total, peak and window.
    pub fn reset_session(&mut self) {
        let now = self.clock.now();
        self.session.reset_scope(now);
        self.peak.reset();
        self.window.clear();
        self.rolling = 0.0;
        tracing::info!(now, "Session reset");
    }

    /// Start over from a clean slate. Also restarts an already-enabled meter.
    pub fn enable(&mut self) {
        *self = Self::new(self.config);
        tracing::info!(config = ?self.config, "Meter enabled");
    }

    /// Release all state. Samples are ignored until [`Self::enable`].
    pub fn disable(&mut self) {
        self.clock.reset();
        self.tracker.clear();
        self.window.clear();
        self.rolling = 0.0;
        self.peak.reset();
        self.session = ScopeAccumulator::starting_at(0.0);
        self.area = ScopeAccumulator::starting_at(0.0);
        self.enabled = false;
        tracing::info!("Meter disabled");
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    // --- Configuration ---

    /// Replace the configuration. Takes effect from the next tick: the window
    /// keeps its contents and the rolling rate keeps its last computed value
    /// until then.
    pub fn set_config(&mut self, config: MeterConfig) {
        if config != self.config {
            tracing::debug!(?config, "Meter config updated");
        }
        self.config = config;
    }

    pub fn config(&self) -> &MeterConfig {
        &self.config
    }

    // --- Read interface ---

    /// Logical time of the most recent tick.
    pub fn now(&self) -> f64 {
        self.clock.now()
    }

    /// Window sum over window length, as computed by the latest tick.
    pub fn rolling_dps(&self) -> f64 {
        self.rolling
    }

    pub fn peak_dps(&self) -> f64 {
        self.peak.peak()
    }

    pub fn session_dps(&self) -> f64 {
        self.session.average_rate(self.clock.now())
    }

    pub fn area_dps(&self) -> f64 {
        self.area.average_rate(self.clock.now())
    }

    pub fn session_damage(&self) -> u64 {
        self.session.total()
    }

    pub fn area_damage(&self) -> u64 {
        self.area.total()
    }

    pub fn session_scope(&self) -> &ScopeAccumulator {
        &self.session
    }

    pub fn area_scope(&self) -> &ScopeAccumulator {
        &self.area
    }

    /// Samples currently in the window, oldest first.
    pub fn window_samples(&self) -> impl Iterator<Item = &DamageSample> {
        self.window.iter()
    }

    pub fn tracked_entities(&self) -> usize {
        self.tracker.len()
    }

    pub fn is_tracking(&self, id: EntityId) -> bool {
        self.tracker.contains(id)
    }

    /// Snapshot of every aggregate as of the latest tick.
    pub fn readout(&self) -> MeterReadout {
        let now = self.clock.now();
        MeterReadout {
            now,
            rolling_dps: self.rolling_dps(),
            peak_dps: self.peak_dps(),
            session_dps: self.session_dps(),
            area_dps: self.area_dps(),
            session_damage: self.session.total(),
            area_damage: self.area.total(),
            session_elapsed: self.session.elapsed(now),
            area_elapsed: self.area.elapsed(now),
            window_samples: self.window.len(),
            tracked_entities: self.tracker.len(),
        }
    }
}

impl SignalHandler for DpsMeter {
    fn handle_signal(&mut self, signal: &MeterSignal) {
        match signal {
            MeterSignal::AreaChanged { area_name } => {
                tracing::debug!(area = ?area_name, "Area changed");
                self.on_scope_boundary();
            }
            MeterSignal::SessionReset => self.reset_session(),
            MeterSignal::Enabled => self.enable(),
            MeterSignal::Disabled => self.disable(),
        }
    }
}
