use crate::error::{RcError, RcResult};

/// Scalar type for ohms, farads, volts, coulombs and seconds.
pub type Real = f64;

/// Absolute/relative tolerance pair for comparing circuit quantities.
///
/// The default absolute floor sits well below the smallest charge the
/// input ranges can produce (1e-7 C).
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

/// True if `a` and `b` agree within `tol.abs` or within `tol.rel` of the larger magnitude.
pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    diff <= tol.abs || diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(value: Real, what: &'static str) -> RcResult<Real> {
    if !value.is_finite() {
        return Err(RcError::NonFinite { what, value });
    }
    Ok(value)
}

/// Finite and strictly greater than zero.
pub fn ensure_positive(value: Real, what: &'static str) -> RcResult<Real> {
    let value = ensure_finite(value, what)?;
    if value <= 0.0 {
        return Err(RcError::NonPositive { what, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn nearly_equal_at_circuit_scales() {
        let tol = Tolerances::default();
        // τ for 1 kΩ and 100 μF
        assert!(nearly_equal(1_000.0 * 100e-6, 0.1, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1e-7, 2e-7, tol));
        assert!(!nearly_equal(5.0, 5.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_names_the_quantity() {
        let err = ensure_finite(Real::NAN, "capacitance").unwrap_err();
        assert!(err.to_string().contains("capacitance"));
    }

    #[test]
    fn ensure_positive_rejects_zero_and_negative() {
        assert_eq!(
            ensure_positive(0.0, "r"),
            Err(RcError::NonPositive {
                what: "r",
                value: 0.0
            })
        );
        assert!(ensure_positive(-1.0, "r").is_err());
        assert!(matches!(
            ensure_positive(Real::INFINITY, "r"),
            Err(RcError::NonFinite { .. })
        ));
        assert_eq!(ensure_positive(2.5, "r"), Ok(2.5));
    }

    proptest! {
        #[test]
        fn nearly_equal_is_symmetric(a in -1e6_f64..1e6, b in -1e6_f64..1e6) {
            let tol = Tolerances::default();
            prop_assert_eq!(nearly_equal(a, b, tol), nearly_equal(b, a, tol));
        }
    }
}
