/// Decide whether the rolling window has gone stale.
///
/// True when the threshold is positive, the window holds at least one sample,
/// and the newest sample is more than `idle_threshold` seconds old. A
/// threshold of zero (or less) disables the check.
pub fn should_clear_window(now: f64, last_sample_time: Option<f64>, idle_threshold: f64) -> bool {
    if idle_threshold <= 0.0 || idle_threshold.is_nan() {
        return false;
    }
    last_sample_time.is_some_and(|last| now - last > idle_threshold)
}
