//! Per-entity health tracking
//!
//! The host hands the meter a filtered snapshot of observable entities every
//! tick. The tracker remembers each entity's last combined health and turns
//! decreases into raw damage.
//!
//! ```text
//!   snapshot (id, health, valid)
//!              │
//!              ▼
//!   HealthTracker::observe ──► raw damage for this tick
//!              │
//!              └─► entities missing from the snapshot are pruned
//! ```

pub mod tracker;

#[cfg(test)]
mod tracker_tests;

pub use tracker::{EntityId, HealthTracker, ObservedEntity, TrackedEntity};
