//! Host-side tooling around the DPS meter engine: settings persistence and a
//! trace replay harness.

pub mod commands;
pub mod settings_store;
pub mod trace;
