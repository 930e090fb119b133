//! Distraction decay step table.

use sc_core::Real;

/// Ordered (upper bound, factor) thresholds, inclusive on the bound.
const STEPS: [(Real, Real); 4] = [(0.5, 1.0), (1.0, 0.9), (1.5, 0.7), (2.0, 0.5)];

/// Factor applied once every threshold is exceeded.
const HEAVY_DISTRACTION_FACTOR: Real = 0.2;

/// Map self-reported distraction hours/day to a growth multiplier in (0, 1].
///
/// A boundary value takes the lower (less penalizing) bucket: exactly
/// 2.0 hours maps to 0.5, not 0.2.
pub fn distraction_factor(hours_per_day: Real) -> Real {
    for (bound, factor) in STEPS {
        if hours_per_day <= bound {
            return factor;
        }
    }
    HEAVY_DISTRACTION_FACTOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_table_buckets() {
        assert_eq!(distraction_factor(0.0), 1.0);
        assert_eq!(distraction_factor(0.75), 0.9);
        assert_eq!(distraction_factor(1.25), 0.7);
        assert_eq!(distraction_factor(1.75), 0.5);
        assert_eq!(distraction_factor(3.0), 0.2);
    }

    #[test]
    fn boundaries_take_the_lower_bucket() {
        assert_eq!(distraction_factor(0.5), 1.0);
        assert_eq!(distraction_factor(0.51), 0.9);
        assert_eq!(distraction_factor(1.0), 0.9);
        assert_eq!(distraction_factor(1.5), 0.7);
        assert_eq!(distraction_factor(2.0), 0.5);
        assert_eq!(distraction_factor(2.01), 0.2);
    }

    #[test]
    fn negative_hours_fall_in_the_first_bucket() {
        // The engine does not validate range; a negative report simply
        // lands below the first threshold.
        assert_eq!(distraction_factor(-1.0), 1.0);
    }
}
