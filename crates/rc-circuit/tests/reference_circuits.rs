//! Worked examples with hand-checked values.

use rc_circuit::{CircuitParams, DEFAULT_SAMPLES, voltage_at};
use rc_core::{Tolerances, nearly_equal};

const TOL: Tolerances = Tolerances {
    abs: 1e-15,
    rel: 1e-9,
};

#[test]
fn one_kilohm_hundred_microfarad_five_volt() {
    let p = CircuitParams::from_inputs(1_000.0, 100.0, 5.0).unwrap();
    let traj = p.evaluate(DEFAULT_SAMPLES).unwrap();

    assert!(nearly_equal(traj.time_constant_s, 0.1, TOL));
    assert!(nearly_equal(traj.t_max_s, 0.5, TOL));
    assert_eq!(traj.len(), 500);
    assert_eq!(traj.t[0], 0.0);
    assert_eq!(*traj.t.last().unwrap(), traj.t_max_s);

    let summary = p.summary();
    assert!(nearly_equal(summary.q_max_c, 5e-4, TOL));
    assert_eq!(summary.vc_final_v, 5.0);

    let vc_tau = voltage_at(0.1, 5.0, traj.time_constant_s);
    assert!((vc_tau - 3.1606).abs() < 1e-4);
    assert!(nearly_equal(vc_tau, summary.vc_at_tau_v, TOL));

    // t = τ falls between samples; the nearest sample brackets Vc(τ)
    let idx = traj.t.iter().position(|&t| t >= 0.1).unwrap();
    assert!(traj.vc[idx - 1] <= vc_tau && vc_tau <= traj.vc[idx]);
}

#[test]
fn smallest_accepted_circuit() {
    let p = CircuitParams::from_inputs(100.0, 0.1, 1.0).unwrap();
    let traj = p.evaluate(DEFAULT_SAMPLES).unwrap();

    assert!(nearly_equal(traj.time_constant_s, 1e-5, TOL));
    assert!(nearly_equal(traj.t_max_s, 5e-5, TOL));
    assert!(nearly_equal(p.summary().q_max_c, 1e-7, TOL));
    assert_eq!(*traj.t.last().unwrap(), traj.t_max_s);

    let last_q = *traj.q.last().unwrap();
    assert!(last_q > 0.993e-7 && last_q <= 1e-7);
}
