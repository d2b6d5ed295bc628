/// Apply the noise floor to one tick's raw damage.
///
/// Returns the amount unchanged when it is strictly greater than `floor`.
/// Zero never produces an event, whatever the floor.
pub fn admit(raw_damage: u64, floor: f32) -> Option<u64> {
    let floor = if floor.is_nan() { 0.0 } else { f64::from(floor) };
    (raw_damage > 0 && raw_damage as f64 > floor).then_some(raw_damage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_floor_admits_any_positive() {
        assert_eq!(admit(1, 0.0), Some(1));
        assert_eq!(admit(300, 0.0), Some(300));
        assert_eq!(admit(0, 0.0), None);
    }

    #[test]
    fn test_floor_is_strict() {
        assert_eq!(admit(500, 500.0), None);
        assert_eq!(admit(501, 500.0), Some(501));
        assert_eq!(admit(300, 500.0), None);
    }

    #[test]
    fn test_negative_or_nan_floor() {
        assert_eq!(admit(0, -10.0), None);
        assert_eq!(admit(5, -10.0), Some(5));
        assert_eq!(admit(5, f32::NAN), Some(5));
    }
}
