//! Characteristic values of a charging RC circuit.

use rc_core::{Charge, Real, Time, Voltage, coulomb, s, volt};

use crate::transient::{charge_fraction, plot_horizon, time_constant, voltage_at};

/// Scalar results shown next to the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CircuitSummary {
    /// τ = R·C (seconds)
    pub time_constant_s: Real,
    /// Plot horizon, 5τ (seconds)
    pub t_max_s: Real,
    /// Asymptotic charge E0·C (coulombs)
    pub q_max_c: Real,
    /// Asymptotic capacitor voltage E0 (volts)
    pub vc_final_v: Real,
    /// Vc(τ) = E0·(1 - e^-1) (volts)
    pub vc_at_tau_v: Real,
}

impl CircuitSummary {
    pub fn new(r_ohm: Real, c_farad: Real, e0_volt: Real) -> Self {
        let tau = time_constant(r_ohm, c_farad);
        Self {
            time_constant_s: tau,
            t_max_s: plot_horizon(tau),
            q_max_c: e0_volt * c_farad,
            vc_final_v: e0_volt,
            vc_at_tau_v: voltage_at(tau, e0_volt, tau),
        }
    }

    pub fn time_constant(&self) -> Time {
        s(self.time_constant_s)
    }

    pub fn q_max(&self) -> Charge {
        coulomb(self.q_max_c)
    }

    pub fn vc_final(&self) -> Voltage {
        volt(self.vc_final_v)
    }

    pub fn vc_at_tau(&self) -> Voltage {
        volt(self.vc_at_tau_v)
    }
}

/// Progress of the charge after a whole number of time constants.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SettlingRow {
    pub n_tau: u32,
    pub time_s: Real,
    /// 1 - e^-n
    pub fraction: Real,
}

/// Rows for n = 1..=max_n time constants.
pub fn settling_table(tau_s: Real, max_n: u32) -> Vec<SettlingRow> {
    (1..=max_n)
        .map(|n| {
            let time_s = Real::from(n) * tau_s;
            SettlingRow {
                n_tau: n,
                time_s,
                fraction: charge_fraction(Real::from(n), 1.0),
            }
        })
        .collect()
}
