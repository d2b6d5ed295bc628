//! Sampling-and-aggregation engine for a per-frame DPS meter.
//!
//! The host calls [`DpsMeter::sample`] once per frame with the entities it can
//! currently see. The meter infers damage from health decreases and keeps a
//! rolling rate, its peak, and session/area averages.

pub mod clock;
pub mod entity;
pub mod events;
pub mod meter;
pub mod metrics;
pub mod panel;

// Re-exports for convenience
pub use clock::MeterClock;
pub use dpsmeter_types::{DisplaySettings, MeterConfig, MeterSettings};
pub use entity::{EntityId, HealthTracker, ObservedEntity};
pub use events::{MeterSignal, SignalHandler};
pub use meter::{DpsMeter, MeterReadout, TickOutcome};
pub use metrics::DamageSample;
