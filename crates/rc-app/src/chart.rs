//! Chart description handed to rendering surfaces.
//!
//! The evaluator knows nothing about drawing. Frontends receive a
//! [`ChartSpec`] (labels, one series and optional reference lines) and
//! render it through whatever [`ChartSurface`] they own: egui in the
//! desktop app, plain text in the CLI, a recorder in tests.

use rc_circuit::{CircuitSummary, Trajectory};
use rc_core::Real;
use serde::Serialize;

use crate::magnitude::Magnitude;

pub const TIME_AXIS_LABEL: &str = "Time t [s]";

/// Straight reference line drawn over the series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ReferenceMarker {
    Vertical { x: Real, label: String },
    Horizontal { y: Real, label: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series_name: String,
    /// `[t, y]` pairs, ascending in `t`
    pub points: Vec<[Real; 2]>,
    pub markers: Vec<ReferenceMarker>,
}

impl ChartSpec {
    /// Chart for the selected magnitude.
    ///
    /// The voltage view carries a vertical line at t = τ and a horizontal
    /// line at Vc(τ); the charge view has no markers.
    pub fn for_magnitude(
        trajectory: &Trajectory,
        summary: &CircuitSummary,
        magnitude: Magnitude,
    ) -> Self {
        let (points, markers) = match magnitude {
            Magnitude::Charge => (trajectory.charge_points(), Vec::new()),
            Magnitude::Voltage => (
                trajectory.voltage_points(),
                vec![
                    ReferenceMarker::Vertical {
                        x: summary.time_constant_s,
                        label: format!("t = τ = {:.4e} s", summary.time_constant_s),
                    },
                    ReferenceMarker::Horizontal {
                        y: summary.vc_at_tau_v,
                        label: format!("Vc(τ) = {:.4} V", summary.vc_at_tau_v),
                    },
                ],
            ),
        };

        Self {
            title: magnitude.title().to_string(),
            x_label: TIME_AXIS_LABEL.to_string(),
            y_label: magnitude.axis_label().to_string(),
            series_name: magnitude.series_name().to_string(),
            points,
            markers,
        }
    }

    pub fn x_values(&self) -> impl Iterator<Item = Real> + '_ {
        self.points.iter().map(|p| p[0])
    }

    pub fn y_values(&self) -> impl Iterator<Item = Real> + '_ {
        self.points.iter().map(|p| p[1])
    }
}

/// Anything that can draw a [`ChartSpec`].
pub trait ChartSurface {
    type Error;

    fn plot(&mut self, chart: &ChartSpec) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rc_circuit::CircuitParams;

    fn spec(magnitude: Magnitude) -> ChartSpec {
        let params = CircuitParams::default();
        let traj = params.evaluate(50).unwrap();
        ChartSpec::for_magnitude(&traj, &params.summary(), magnitude)
    }

    #[test]
    fn charge_view_has_no_markers() {
        let chart = spec(Magnitude::Charge);
        assert!(chart.markers.is_empty());
        assert_eq!(chart.series_name, "q(t)");
        assert_eq!(chart.x_label, TIME_AXIS_LABEL);
        assert_eq!(chart.points.len(), 50);
    }

    #[test]
    fn voltage_view_marks_time_constant() {
        let chart = spec(Magnitude::Voltage);
        assert_eq!(chart.y_label, "Voltage Vc(t) [V]");
        assert_eq!(chart.markers.len(), 2);
        match &chart.markers[0] {
            ReferenceMarker::Vertical { x, .. } => assert!((x - 0.1).abs() < 1e-12),
            other => panic!("expected vertical marker, got {other:?}"),
        }
        match &chart.markers[1] {
            ReferenceMarker::Horizontal { y, label } => {
                assert!((y - 3.1606).abs() < 1e-4);
                assert!(label.contains("3.1606"));
            }
            other => panic!("expected horizontal marker, got {other:?}"),
        }
    }

    #[test]
    fn x_and_y_split_points() {
        let chart = spec(Magnitude::Voltage);
        let xs: Vec<Real> = chart.x_values().collect();
        let ys: Vec<Real> = chart.y_values().collect();
        assert_eq!(xs.len(), ys.len());
        assert_eq!(xs[0], 0.0);
        assert_eq!(ys[0], 0.0);
    }
}
