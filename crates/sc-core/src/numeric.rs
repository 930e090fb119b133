use crate::CoreError;

/// Floating point type used throughout the workspace.
///
/// Scores are dimensionless percent points, so a plain f64 is all the
/// unit machinery this domain needs.
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances::default();
        assert!(nearly_equal(100.0, 100.0 + 1e-13, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(95.07, 95.08, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "initial_score").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
        assert!(msg.contains("initial_score"));
    }

    #[test]
    fn ensure_finite_passes_ordinary_scores() {
        assert_eq!(ensure_finite(80.0, "score").unwrap(), 80.0);
        // Out-of-band but finite values are not this function's business.
        assert_eq!(ensure_finite(-12.5, "score").unwrap(), -12.5);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn nearly_equal_is_symmetric(a in -1e6_f64..1e6, b in -1e6_f64..1e6) {
            let tol = Tolerances::default();
            prop_assert_eq!(nearly_equal(a, b, tol), nearly_equal(b, a, tol));
        }

        #[test]
        fn finite_values_round_trip(v in -1e9_f64..1e9) {
            prop_assert_eq!(ensure_finite(v, "v").unwrap(), v);
        }
    }
}
