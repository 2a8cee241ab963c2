use crate::CoreError;

/// Floating point type used throughout the calculator
pub type Real = f64;

/// Absolute + relative tolerance pair for float comparisons
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

/// Linear interpolation of `y` at `x` between `(x0, y0)` and `(x1, y1)`.
///
/// Fails when the two abscissae coincide.
pub fn lerp(x: Real, (x0, y0): (Real, Real), (x1, y1): (Real, Real)) -> Result<Real, CoreError> {
    let span = x1 - x0;
    if span == 0.0 {
        return Err(CoreError::InvalidArg {
            what: "interpolation span must be non-zero",
        });
    }
    ensure_finite(y0 + (x - x0) * (y1 - y0) / span, "interpolated value")
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn lerp_stays_between_endpoints(t in 0.0_f64..=1.0, y0 in -1e3_f64..1e3, y1 in -1e3_f64..1e3) {
            let y = lerp(t, (0.0, y0), (1.0, y1)).unwrap();
            let tol = Tolerances { abs: 1e-9, rel: 1e-9 };
            prop_assert!(y >= y0.min(y1) - tol.abs && y <= y0.max(y1) + tol.abs);
        }
    }
}
