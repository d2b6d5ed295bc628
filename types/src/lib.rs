//! Shared configuration types for the DPS meter.
//!
//! These are plain values: the engine receives a [`MeterConfig`] by value and the
//! presentation side reads [`DisplaySettings`]. Loading and saving them is the
//! host's concern.

pub mod formatting;
pub mod settings;

pub use settings::{DisplaySettings, MeterConfig, MeterSettings};
