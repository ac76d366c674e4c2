//! Percentage-of-target progress.

/// `current / target * 100`, clamped to `[0, 100]`.
///
/// A target that is zero, negative or not finite yields 0%, as does a non-finite current value.
pub fn percentage(current: f64, target: f64) -> f64 {
    if !target.is_finite() || target <= 0.0 || !current.is_finite() {
        return 0.0;
    }
    (current / target * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_in_range() {
        assert_eq!(percentage(250.0, 1000.0), 25.0);
        assert_eq!(percentage(0.0, 1000.0), 0.0);
        assert_eq!(percentage(1000.0, 1000.0), 100.0);
    }

    #[test]
    fn test_percentage_clamps() {
        assert_eq!(percentage(1500.0, 1000.0), 100.0);
        assert_eq!(percentage(-50.0, 1000.0), 0.0);
    }

    #[test]
    fn test_zero_or_invalid_target_is_zero_percent() {
        assert_eq!(percentage(100.0, 0.0), 0.0);
        assert_eq!(percentage(0.0, 0.0), 0.0);
        assert_eq!(percentage(100.0, -10.0), 0.0);
        assert_eq!(percentage(100.0, f64::NAN), 0.0);
        assert_eq!(percentage(f64::INFINITY, 10.0), 0.0);
    }
}
