use serde::{Deserialize, Serialize};

/// Smallest window length used as a rate denominator.
pub const MIN_WINDOW_SECS: f64 = 0.001;

/// Tuning for the sampling engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeterConfig {
    /// Length of the trailing window used for the rolling rate, in seconds.
    pub window_length_secs: f32,
    /// Clear the rolling window after this long without admitted damage.
    /// `0` means never.
    pub idle_reset_secs: f32,
    /// Per-tick damage must be strictly greater than this to be admitted.
    pub min_damage_sample: f32,
}

impl Default for MeterConfig {
    fn default() -> Self {
        Self {
            window_length_secs: 8.0,
            idle_reset_secs: 4.0,
            min_damage_sample: 0.0,
        }
    }
}

impl MeterConfig {
    /// Window length as used in a division. The configured value is left untouched.
    pub fn window_denominator(&self) -> f64 {
        f64::from(self.window_length_secs).max(MIN_WINDOW_SECS)
    }

    /// Eviction horizon. Non-positive lengths evict everything older than the current tick.
    pub fn window_length(&self) -> f64 {
        f64::from(self.window_length_secs.max(0.0))
    }
}

/// Which aggregates the panel shows and how numbers are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub show_rolling: bool,
    pub show_max: bool,
    pub show_session: bool,
    pub show_area: bool,
    /// Render rates with K/M suffixes.
    pub humanize_numbers: bool,
    /// Swap `.` and `,` in rendered numbers.
    pub european_numbers: bool,
    pub show_sparkline: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            show_rolling: false,
            show_max: true,
            show_session: false,
            show_area: false,
            humanize_numbers: true,
            european_numbers: false,
            show_sparkline: true,
        }
    }
}

/// The persisted settings document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeterSettings {
    pub meter: MeterConfig,
    pub display: DisplaySettings,
}
