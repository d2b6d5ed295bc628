//! Damage aggregation primitives.
//!
//! Each piece here is small and owns one aggregate. [`crate::DpsMeter`] wires
//! them together in tick order.

pub mod extract;
pub mod idle;
pub mod peak;
pub mod scope;
pub mod window;

pub use extract::admit;
pub use idle::should_clear_window;
pub use peak::PeakTracker;
pub use scope::{SCOPE_EPSILON_SECS, ScopeAccumulator};
pub use window::{DamageSample, DamageWindow};
