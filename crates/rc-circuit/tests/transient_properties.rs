//! Property tests for the closed-form charging transient over the accepted input ranges.

use proptest::prelude::*;
use rc_circuit::{CircuitParams, DEFAULT_SAMPLES, evaluate};

fn params() -> impl Strategy<Value = CircuitParams> {
    (100.0_f64..=10_000.0, 0.1_f64..=1_000.0, 1.0_f64..=30.0).prop_map(|(r, c_uf, e0)| {
        CircuitParams::from_inputs(r, c_uf, e0).expect("strategy stays inside input ranges")
    })
}

proptest! {
    #[test]
    fn starts_from_rest(p in params()) {
        let traj = p.evaluate(DEFAULT_SAMPLES).unwrap();
        prop_assert_eq!(traj.t[0], 0.0);
        prop_assert_eq!(traj.q[0], 0.0);
        prop_assert_eq!(traj.vc[0], 0.0);
    }

    #[test]
    fn charge_is_non_decreasing(p in params()) {
        let traj = p.evaluate(DEFAULT_SAMPLES).unwrap();
        prop_assert!(traj.t.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(traj.q.windows(2).all(|w| w[0] <= w[1]));
        prop_assert!(traj.vc.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn bounded_by_asymptotes(p in params()) {
        let traj = p.evaluate(DEFAULT_SAMPLES).unwrap();
        let c = p.capacitance_farad();
        let e0 = p.source_voltage_v();
        let q_max = e0 * c;
        for (&q, &vc) in traj.q.iter().zip(&traj.vc) {
            prop_assert!(q >= 0.0 && q <= q_max);
            prop_assert!(vc >= 0.0 && vc <= e0 * (1.0 + 1e-12));
        }
    }

    #[test]
    fn horizon_reaches_asymptote(p in params()) {
        let traj = p.evaluate(DEFAULT_SAMPLES).unwrap();
        let q_max = p.source_voltage_v() * p.capacitance_farad();
        let last = *traj.q.last().unwrap();
        prop_assert!(last >= 0.993 * q_max);
        prop_assert!((traj.t_max_s - 5.0 * traj.time_constant_s).abs() <= 1e-12 * traj.t_max_s);
    }

    #[test]
    fn voltage_is_charge_over_capacitance(p in params()) {
        let traj = p.evaluate(DEFAULT_SAMPLES).unwrap();
        let c = p.capacitance_farad();
        for (&q, &vc) in traj.q.iter().zip(&traj.vc) {
            prop_assert_eq!(vc, q / c);
        }
    }

    #[test]
    fn sequences_share_length(p in params(), samples in 1usize..2_000) {
        let traj = p.evaluate(samples).unwrap();
        prop_assert_eq!(traj.t.len(), samples);
        prop_assert_eq!(traj.q.len(), samples);
        prop_assert_eq!(traj.vc.len(), samples);
    }

    #[test]
    fn evaluation_is_deterministic(r in 1e-3_f64..1e6, c in 1e-12_f64..1.0, e0 in 1e-3_f64..1e3) {
        let a = evaluate(r, c, e0, 64).unwrap();
        let b = evaluate(r, c, e0, 64).unwrap();
        prop_assert_eq!(a, b);
    }
}
