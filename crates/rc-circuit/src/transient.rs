//! Closed-form charging transient of a series RC circuit.
//!
//! Kirchhoff's voltage law around the loop gives the first-order linear ODE
//!
//! ```text
//! R dq/dt + q/C = E0,   q(0) = 0
//! ```
//!
//! whose integrating-factor solution is `q(t) = E0 C (1 - e^(-t/RC))`. The
//! capacitor voltage follows as `Vc(t) = q(t) / C`.

use rc_core::{Real, ensure_finite, ensure_positive};
use tracing::debug;

use crate::error::{CircuitError, CircuitResult};
use crate::ranges::{FALLBACK_HORIZON_S, HORIZON_TIME_CONSTANTS};
use crate::sampling::linspace;

/// Sampled charge and voltage trajectories.
///
/// `t`, `q` and `vc` always have the same length.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Trajectory {
    /// τ = R·C (seconds)
    pub time_constant_s: Real,
    /// Upper end of the sampled range (seconds)
    pub t_max_s: Real,
    /// Time points (seconds), ascending from 0 to `t_max_s`
    pub t: Vec<Real>,
    /// Capacitor charge (coulombs)
    pub q: Vec<Real>,
    /// Capacitor voltage (volts)
    pub vc: Vec<Real>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// `(t, q)` pairs for plotting.
    pub fn charge_points(&self) -> Vec<[Real; 2]> {
        zip_points(&self.t, &self.q)
    }

    /// `(t, Vc)` pairs for plotting.
    pub fn voltage_points(&self) -> Vec<[Real; 2]> {
        zip_points(&self.t, &self.vc)
    }
}

fn zip_points(x: &[Real], y: &[Real]) -> Vec<[Real; 2]> {
    x.iter().zip(y).map(|(&x, &y)| [x, y]).collect()
}

/// τ = R·C in seconds.
#[inline]
pub fn time_constant(r_ohm: Real, c_farad: Real) -> Real {
    r_ohm * c_farad
}

/// Upper plotting bound: five time constants, or 1 s when τ is degenerate.
#[inline]
pub fn plot_horizon(tau_s: Real) -> Real {
    if tau_s > 0.0 {
        HORIZON_TIME_CONSTANTS * tau_s
    } else {
        FALLBACK_HORIZON_S
    }
}

/// Fraction of the asymptote reached at `t`: `1 - e^(-t/τ)`.
///
/// Evaluated through `exp_m1` to keep precision for `t << τ`. A degenerate τ
/// behaves as an instantaneous step.
#[inline]
pub fn charge_fraction(t_s: Real, tau_s: Real) -> Real {
    if t_s <= 0.0 {
        0.0
    } else if tau_s <= 0.0 {
        1.0
    } else {
        -(-t_s / tau_s).exp_m1()
    }
}

/// q(t) = E0·C·(1 - e^(-t/τ)) in coulombs.
#[inline]
pub fn charge_at(t_s: Real, c_farad: Real, e0_volt: Real, tau_s: Real) -> Real {
    e0_volt * c_farad * charge_fraction(t_s, tau_s)
}

/// Vc(t) = E0·(1 - e^(-t/τ)) in volts.
#[inline]
pub fn voltage_at(t_s: Real, e0_volt: Real, tau_s: Real) -> Real {
    e0_volt * charge_fraction(t_s, tau_s)
}

/// Evaluate the charging transient over `[0, t_max]` with `samples` points.
///
/// Rejects non-finite or non-positive `r_ohm`, `c_farad`, `e0_volt` and a
/// zero sample count. `Vc` is computed as `q / C` at every point.
pub fn evaluate(
    r_ohm: Real,
    c_farad: Real,
    e0_volt: Real,
    samples: usize,
) -> CircuitResult<Trajectory> {
    let r = ensure_positive(r_ohm, "resistance")?;
    let c = ensure_positive(c_farad, "capacitance")?;
    let e0 = ensure_positive(e0_volt, "source voltage")?;
    if samples == 0 {
        return Err(CircuitError::NoSamples);
    }

    let tau = ensure_finite(time_constant(r, c), "time constant")?;
    let t_max = plot_horizon(tau);

    let t = linspace(0.0, t_max, samples);
    let q: Vec<Real> = t.iter().map(|&ti| charge_at(ti, c, e0, tau)).collect();
    let vc: Vec<Real> = q.iter().map(|&qi| qi / c).collect();

    debug!(tau_s = tau, t_max_s = t_max, samples, "evaluated RC transient");

    Ok(Trajectory {
        time_constant_s: tau,
        t_max_s: t_max,
        t,
        q,
        vc,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rc_core::{Tolerances, nearly_equal};

    #[test]
    fn fraction_at_one_tau() {
        let f = charge_fraction(0.1, 0.1);
        assert!(nearly_equal(f, 1.0 - (-1.0f64).exp(), Tolerances::default()));
    }

    #[test]
    fn fraction_small_t_keeps_precision() {
        // 1 - e^-x ~ x for tiny x; naive subtraction would round to 0
        let f = charge_fraction(1e-20, 1.0);
        assert!(nearly_equal(f, 1e-20, Tolerances { abs: 0.0, rel: 1e-9 }));
    }

    #[test]
    fn degenerate_tau_is_a_step() {
        assert_eq!(plot_horizon(0.0), FALLBACK_HORIZON_S);
        assert_eq!(plot_horizon(-1.0), FALLBACK_HORIZON_S);
        assert_eq!(plot_horizon(Real::NAN), FALLBACK_HORIZON_S);
        assert_eq!(charge_fraction(0.0, 0.0), 0.0);
        assert_eq!(charge_fraction(0.5, 0.0), 1.0);
    }

    #[test]
    fn underflowing_time_constant_uses_fallback_horizon() {
        let traj = evaluate(1e-200, 1e-200, 2.0, 3).unwrap();
        assert_eq!(traj.time_constant_s, 0.0);
        assert_eq!(traj.t, vec![0.0, 0.5, 1.0]);
        assert_eq!(traj.vc, vec![0.0, 2.0, 2.0]);
        assert!(traj.q.iter().all(|q| q.is_finite()));
    }

    #[test]
    fn rejects_invalid_inputs() {
        assert!(matches!(
            evaluate(0.0, 1e-4, 5.0, 10),
            Err(CircuitError::NonPositive {
                what: "resistance",
                ..
            })
        ));
        assert!(matches!(
            evaluate(1_000.0, -1e-4, 5.0, 10),
            Err(CircuitError::NonPositive {
                what: "capacitance",
                ..
            })
        ));
        assert!(matches!(
            evaluate(1_000.0, 1e-4, Real::NAN, 10),
            Err(CircuitError::NonFinite {
                what: "source voltage",
                ..
            })
        ));
        assert_eq!(evaluate(1_000.0, 1e-4, 5.0, 0), Err(CircuitError::NoSamples));
    }

    #[test]
    fn overflowing_time_constant_is_rejected() {
        assert!(matches!(
            evaluate(1e200, 1e200, 5.0, 10),
            Err(CircuitError::NonFinite {
                what: "time constant",
                ..
            })
        ));
    }

    #[test]
    fn single_sample_is_origin() {
        let traj = evaluate(1_000.0, 1e-4, 5.0, 1).unwrap();
        assert_eq!(traj.t, vec![0.0]);
        assert_eq!(traj.q, vec![0.0]);
        assert_eq!(traj.vc, vec![0.0]);
    }

    #[test]
    fn plot_points_pair_up() {
        let traj = evaluate(1_000.0, 1e-4, 5.0, 4).unwrap();
        let q_pts = traj.charge_points();
        let v_pts = traj.voltage_points();
        assert_eq!(q_pts.len(), traj.len());
        assert_eq!(v_pts.len(), traj.len());
        for i in 0..traj.len() {
            assert_eq!(q_pts[i], [traj.t[i], traj.q[i]]);
            assert_eq!(v_pts[i], [traj.t[i], traj.vc[i]]);
        }
    }
}
