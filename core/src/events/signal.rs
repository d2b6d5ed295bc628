/// Lifecycle signals a host forwards to the meter.
///
/// These are delivered synchronously between ticks; the meter never waits on
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeterSignal {
    /// The player entered a new area instance (scope boundary).
    AreaChanged { area_name: Option<String> },

    /// The user asked for session totals and peak to be cleared.
    SessionReset,

    // Meter lifecycle
    Enabled,
    Disabled,
}
